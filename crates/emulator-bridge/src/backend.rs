//! Emulator backend selection
//!
//! Maps a target CPU architecture to the suffix of the emulator backend
//! that runs it (`emulator-arm`, `emulator-x86`, ...).

/// Supported architectures and their backend suffix
const BACKEND_SUFFIXES: &[(&str, &str)] = &[
    ("arm", "arm"),
    ("x86", "x86"),
    ("x86_64", "x86"),
    ("mips", "mips"),
];

/// Backend suffix for `arch`, or `None` when no backend handles it.
///
/// Matching is exact and case-sensitive.
pub fn backend_suffix(arch: Option<&str>) -> Option<&'static str> {
    let arch = arch?;
    BACKEND_SUFFIXES
        .iter()
        .find(|(name, _)| *name == arch)
        .map(|(_, suffix)| *suffix)
}

/// Architectures with a backend
pub fn supported_architectures() -> impl Iterator<Item = &'static str> {
    BACKEND_SUFFIXES.iter().map(|(name, _)| *name)
}

/// Backend program name for `arch`
pub fn backend_program_name(arch: &str) -> Option<String> {
    backend_suffix(Some(arch)).map(|suffix| format!("emulator-{}", suffix))
}
