//! The contextual guide.
//!
//! A question flows through three pure steps:
//!
//! 1. [`Intent::classify`] maps the raw text to a topic with an ordered
//!    keyword table.
//! 2. [`ContextBuilder::build`] turns a [`ScopeSnapshot`](crate::scope::ScopeSnapshot)
//!    into a structured [`ChatContext`].
//! 3. A [`Responder`] picks the answer text from the intent and context.
//!
//! [`Guide`] runs the three in order. None of them suspends or performs I/O.

mod context;
mod guide;
mod intent;
mod responder;

pub use context::{ChatContext, ContextBuilder, Fact, IslandFacts, IslandSummary, SpeciesFacts};
pub use guide::{Answer, Guide};
pub use intent::{INTENT_RULES, Intent, IntentRule};
pub use responder::{Responder, RuleBasedResponder, fallback};
