#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Version info only; the report runs unattended so no icon is embedded
    let mut res = WindowsResource::new();
    res.set("FileDescription", "boathours report CLI")
        .set("ProductName", "boathours")
        .set("OriginalFilename", "boathours.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed version resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
