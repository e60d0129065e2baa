/// A production job; each job is one boat build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: i64,
    /// `None` when the punch references a job row that does not exist.
    pub name: Option<String>,
}

impl Job {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Display name, falling back to the numeric id.
    pub fn boat_name(&self) -> String {
        match &self.name {
            Some(n) => n.clone(),
            None => self.id.to_string(),
        }
    }
}
