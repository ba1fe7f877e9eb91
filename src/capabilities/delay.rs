use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// Asks the shell to wait before handing control back. The shell owns the
/// actual timer; the core only sees the elapsed signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayOperation {
    pub millis: u64,
}

impl Operation for DelayOperation {
    type Output = ();
}

pub struct Delay<Ev> {
    context: CapabilityContext<DelayOperation, Ev>,
}

impl<Ev> Capability<Ev> for Delay<Ev> {
    type Operation = DelayOperation;
    type MappedSelf<MappedEv> = Delay<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Delay::new(self.context.map_event(f))
    }
}

impl<Ev> Delay<Ev> {
    #[must_use]
    pub fn new(context: CapabilityContext<DelayOperation, Ev>) -> Self {
        Self { context }
    }
}

impl<Ev> Delay<Ev>
where
    Ev: Send + 'static,
{
    /// Fire-and-forget: once started, the timer cannot be cancelled. The
    /// event fed back must carry enough context to decide whether it is
    /// still relevant when it lands.
    pub fn start(&self, millis: u64, event: Ev) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.request_from_shell(DelayOperation { millis }).await;
            context.update_app(event);
        });
    }
}
