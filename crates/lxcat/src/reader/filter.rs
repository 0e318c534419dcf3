// external crates
use log::debug;

/// What happens to a species/database filter the caller left unset
///
/// LXCat downloads often bundle several species and databases in one file,
/// while a [CrossSectionSet](crate::CrossSectionSet) describes exactly one
/// of each.
///
/// - [Adoption::FirstMatch] fixes an unset filter to the value of the first
///   record read, so only that species/database is collected.
/// - [Adoption::Never] leaves unset filters open, so every record passes and
///   the set reports the filter as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Adoption {
    /// Bind unset filters to the first accepted record (default)
    #[default]
    FirstMatch,
    /// Leave unset filters open for the whole scan
    Never,
}

/// A single optional filter value with its adoption policy
#[derive(Debug)]
pub(crate) struct Filter {
    name: &'static str,
    value: Option<String>,
    adoption: Adoption,
}

impl Filter {
    pub(crate) fn new(name: &'static str, value: Option<String>, adoption: Adoption) -> Self {
        Self {
            name,
            value,
            adoption,
        }
    }

    /// Does the candidate pass the filter?
    ///
    /// An unset filter admits anything, including a missing candidate.
    pub(crate) fn admits(&self, candidate: Option<&str>) -> bool {
        match &self.value {
            Some(value) => candidate == Some(value.as_str()),
            None => true,
        }
    }

    /// Fix an unset filter to the candidate of an accepted record
    ///
    /// Only ever takes effect once, and never for a missing candidate.
    pub(crate) fn adopt(&mut self, candidate: Option<&str>) {
        if self.value.is_some() || self.adoption == Adoption::Never {
            return;
        }
        if let Some(candidate) = candidate {
            debug!("Adopted {} filter {candidate:?}", self.name);
            self.value = Some(candidate.to_string());
        }
    }

    pub(crate) fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub(crate) fn into_value(self) -> Option<String> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imposed_filter_compares() {
        let filter = Filter::new("species", Some("N2".to_string()), Adoption::FirstMatch);
        assert!(filter.admits(Some("N2")));
        assert!(!filter.admits(Some("O2")));
        assert!(!filter.admits(None));
    }

    #[test]
    fn first_match_binds_once() {
        let mut filter = Filter::new("species", None, Adoption::FirstMatch);
        assert!(filter.admits(Some("N2")));

        filter.adopt(Some("N2"));
        assert_eq!(filter.value(), Some("N2"));
        assert!(!filter.admits(Some("O2")));

        // a later adoption does not replace the first
        filter.adopt(Some("O2"));
        assert_eq!(filter.value(), Some("N2"));
    }

    #[test]
    fn missing_candidate_is_not_adopted() {
        let mut filter = Filter::new("database", None, Adoption::FirstMatch);
        filter.adopt(None);
        assert_eq!(filter.value(), None);
        assert!(filter.admits(Some("Phelps database")));
    }

    #[test]
    fn never_leaves_filter_open() {
        let mut filter = Filter::new("species", None, Adoption::Never);
        filter.adopt(Some("N2"));
        assert!(filter.admits(Some("O2")));
        assert_eq!(filter.into_value(), None);
    }
}
