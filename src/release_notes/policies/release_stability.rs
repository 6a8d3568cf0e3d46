use crate::release_notes::domain::SupportPhase;

/// ReleaseStability policy classifying support phases
///
/// Encodes the lifecycle rules shared by summaries and read models:
/// - stable: generally available and still receiving fixes
/// - supported: anything short of end-of-life
/// - pre-release: preview or go-live builds
pub struct ReleaseStability;

impl ReleaseStability {
    pub fn is_stable(phase: SupportPhase) -> bool {
        matches!(phase, SupportPhase::Active | SupportPhase::Maintenance)
    }

    pub fn is_supported(phase: SupportPhase) -> bool {
        phase != SupportPhase::Eol
    }

    pub fn is_pre_release(phase: SupportPhase) -> bool {
        matches!(phase, SupportPhase::Preview | SupportPhase::GoLive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_stable() {
        assert!(ReleaseStability::is_stable(SupportPhase::Active));
        assert!(ReleaseStability::is_stable(SupportPhase::Maintenance));
        assert!(!ReleaseStability::is_stable(SupportPhase::Preview));
        assert!(!ReleaseStability::is_stable(SupportPhase::GoLive));
        assert!(!ReleaseStability::is_stable(SupportPhase::Eol));
    }

    #[test]
    fn test_is_supported() {
        assert!(ReleaseStability::is_supported(SupportPhase::Preview));
        assert!(ReleaseStability::is_supported(SupportPhase::Maintenance));
        assert!(!ReleaseStability::is_supported(SupportPhase::Eol));
    }

    #[test]
    fn test_is_pre_release() {
        assert!(ReleaseStability::is_pre_release(SupportPhase::Preview));
        assert!(ReleaseStability::is_pre_release(SupportPhase::GoLive));
        assert!(!ReleaseStability::is_pre_release(SupportPhase::Active));
    }
}
