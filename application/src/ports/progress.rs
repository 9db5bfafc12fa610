//! Progress notification ports
//!
//! Defines the interfaces for reporting progress during a batch run and
//! during mail dispatch.

use outreach_domain::TransportAttempt;

/// Callback for progress updates during an outreach batch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called once with the number of targets that will be processed
    fn on_batch_start(&self, total_targets: usize);

    /// Called when one domain finished, successfully or not
    fn on_domain_complete(&self, host: &str, success: bool);

    /// Called after every domain has been collected
    fn on_batch_complete(&self, succeeded: usize, failed: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_batch_start(&self, _total_targets: usize) {}
    fn on_domain_complete(&self, _host: &str, _success: bool) {}
    fn on_batch_complete(&self, _succeeded: usize, _failed: usize) {}
}

/// Callback for each transport attempt, in configured order
pub trait DispatchNotifier: Send + Sync {
    fn on_attempt(&self, attempt: &TransportAttempt);

    /// Called after all transports were tried for one message
    fn on_dispatch_complete(&self, _recipient: &str, _success_count: usize) {}
}

/// No-op dispatch notifier
pub struct NoDispatchNotifier;

impl DispatchNotifier for NoDispatchNotifier {
    fn on_attempt(&self, _attempt: &TransportAttempt) {}
}
