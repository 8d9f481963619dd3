//! # Example: observer_demo
//!
//! Walks through the attach / notify / detach protocol with the two built-in observers.
//!
//! ## Flow
//! ```text
//! Publisher::from_config()
//!     ├─► attach(low-state), attach(zero-or-high)
//!     ├─► trigger_business_event()   ──► both consulted
//!     ├─► trigger_business_event()   ──► both consulted
//!     ├─► detach(zero-or-high)
//!     └─► trigger_business_event()   ──► only low-state consulted
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example observer_demo
//! RUST_LOG=debug cargo run --example observer_demo
//! ```

use std::rc::Rc;

use observa::{
    LowStateObserver, Observer, Publisher, PublisherConfig, RandomSource, ZeroOrHighObserver,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let subject = Publisher::from_config(PublisherConfig::default(), RandomSource::default())?;

    let observer_a: Rc<dyn Observer> = Rc::new(LowStateObserver);
    subject.attach(&observer_a);
    let observer_b: Rc<dyn Observer> = Rc::new(ZeroOrHighObserver);
    subject.attach(&observer_b);

    subject.trigger_business_event();
    subject.trigger_business_event();

    subject.detach(&observer_b);

    subject.trigger_business_event();
    Ok(())
}
