//! Canonical component names and alias normalization.
//!
//! Sources tag events with free-text component names. Known aliases collapse
//! onto a small closed set; anything unrecognized passes through unchanged.

pub const BREATH: &str = "breath";
pub const REALITY_SIM: &str = "reality_sim";
pub const EXPLORER: &str = "explorer";
pub const DJINN_KERNEL: &str = "djinn_kernel";
pub const SYSTEM: &str = "system";

/// All canonical component names.
pub const CANONICAL: [&str; 5] = [BREATH, REALITY_SIM, EXPLORER, DJINN_KERNEL, SYSTEM];

/// Map a raw component tag onto its canonical name.
///
/// Matching ignores case and surrounding whitespace. Unknown tags are
/// returned as given.
pub fn normalize(raw: &str) -> String {
    let key = raw.trim().to_ascii_lowercase();
    let canonical = match key.as_str() {
        "breath" | "breath_engine" => BREATH,
        "reality_sim" | "reality_simulator" | "realitysim" | "network" => REALITY_SIM,
        "explorer" => EXPLORER,
        "djinn_kernel" | "kernel" | "utm_kernel" | "vm" | "vp" => DJINN_KERNEL,
        "system" => SYSTEM,
        _ => return raw.to_string(),
    };
    canonical.to_string()
}

/// Whether a component name is one of the canonical set.
pub fn is_canonical(name: &str) -> bool {
    CANONICAL.contains(&name)
}
