use parcel_core::config::MergeConfig;
use parcel_core::models::SourceId;

/// Authority ranking used to pick the primary source of a merge.
/// Earlier entries are more authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePriority {
    order: Vec<SourceId>,
}

impl MergePriority {
    pub fn new(order: Vec<SourceId>) -> Self {
        Self { order }
    }

    pub fn from_config(config: &MergeConfig) -> Self {
        Self::new(config.priority.clone())
    }

    /// Position in the table. Unlisted sources rank after every listed one.
    pub fn rank(&self, source: SourceId) -> usize {
        self.order
            .iter()
            .position(|s| *s == source)
            .unwrap_or(self.order.len())
    }

    pub fn order(&self) -> &[SourceId] {
        &self.order
    }
}

impl Default for MergePriority {
    fn default() -> Self {
        Self::from_config(&MergeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_prefers_cersai() {
        let p = MergePriority::default();
        assert_eq!(
            p.order(),
            &[SourceId::Cersai, SourceId::Doris, SourceId::Dlr, SourceId::Mca21]
        );
        assert!(p.rank(SourceId::Cersai) < p.rank(SourceId::Doris));
    }

    #[test]
    fn unlisted_sources_rank_last() {
        let p = MergePriority::new(vec![SourceId::Dlr]);
        assert_eq!(p.rank(SourceId::Dlr), 0);
        assert_eq!(p.rank(SourceId::Doris), 1);
        assert_eq!(p.rank(SourceId::Mca21), 1);
    }
}
