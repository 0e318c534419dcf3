// Core data types split among files for organisation
mod cross_section;
mod kind;
mod set;
mod swarm;
mod table;

// Flatten for the public API
pub use cross_section::{CrossSection, Metadata};
pub use kind::{CrossSectionKind, Process};
pub use set::CrossSectionSet;
pub use swarm::SwarmMeasurement;
pub use table::Table;

/// Relative tolerance matching the 7 significant digits written by `%.6e`
const RELATIVE_TOLERANCE: f64 = 1e-6;

/// Float equality within the precision of the table codec
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= RELATIVE_TOLERANCE * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::approx_eq;

    #[test]
    fn approx_eq_within_precision() {
        assert!(approx_eq(1.951220e-5, 1.9512200000001e-5));
        assert!(approx_eq(0.0, 0.0));
        assert!(!approx_eq(0.0, 1e-30));
        assert!(!approx_eq(1.1e-20, 1.2e-20));
    }
}
