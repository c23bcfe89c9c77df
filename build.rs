use std::{env, path::Path, process::Command};

pub fn main() {
    emit_version_info();

    #[cfg(windows)]
    if std::env::var_os("CARGO_FEATURE_OPENCL").is_some() {
        include_opencl();
    }
}

fn emit_version_info() {
    println!("cargo:rerun-if-changed=build.rs");
    if Path::new(".git/HEAD").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
    }

    let mut full = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    if let Some(commit) = command_output("git", &["rev-parse", "--short", "HEAD"]) {
        full.push_str("+g");
        full.push_str(&commit);
    }

    let target = env::var("TARGET").unwrap_or_default();
    let profile = env::var("PROFILE").unwrap_or_default();
    println!("cargo:rustc-env=BLAZE_WRAP_VERSION_FULL={full} ({target} {profile})");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| String::from("rustc"));
    let compiler = command_output(&rustc, &["--version"]).unwrap_or_else(|| String::from("rustc"));
    println!("cargo:rustc-env=BLAZE_WRAP_COMPILER={compiler}");
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(windows)]
fn include_opencl() {
    use camino::Utf8Path;

    if let Some(path) = option_env!("CUDA_PATH") {
        let lib = Utf8Path::new(path).join("lib");
        #[cfg(target_pointer_width = "32")]
        let path = lib.join("Win32");
        #[cfg(target_pointer_width = "64")]
        let path = lib.join("x64");
        println!("cargo:rustc-link-search={path}");
    } else {
        println!("cargo:warning=OpenCL library path not found. Linking may fail on Windows systems.")
    }
}
