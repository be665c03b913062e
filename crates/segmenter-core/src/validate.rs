use crate::error::{Result, SegError};
use crate::policy::Policy;

/// Preconditions shared by every segmentation entry point.
/// Checked before any division or modulo by the agent count.
pub fn validate_run(n_agents: usize, policy: Policy) -> Result<()> {
    if n_agents == 0 {
        return Err(SegError::NoAgentsSelected);
    }
    // `Policy` is public, so a literal can bypass `Policy::capped`.
    if let Policy::CappedRoundRobin { max_rows: 0 } = policy {
        return Err(SegError::InvalidPolicyParameter(0));
    }
    Ok(())
}
