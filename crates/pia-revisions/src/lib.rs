//! Revision timeline for PIA assessments.
//!
//! Revisions are grouped under localized labels such as "Today",
//! "3 days ago" or "January 2024":
//!
//! 1. [`RelativeDatePolicy`] places a timestamp in a [`RelativeAge`] bucket.
//! 2. The bucket's English phrase is turned into a key with [`slugify`].
//! 3. [`GroupKeyResolver`] looks the key up under `date.*`, or formats the
//!    month and year for old revisions.
//! 4. [`RevisionGroups`] collects records under their label in first-seen order.
//!
//! [`RevisionsPanel`] drives this for a sidebar view.

pub mod groups;
pub mod key;
pub mod model;
pub mod panel;
pub mod relative_date;
pub mod slug;

pub use groups::RevisionGroups;
pub use key::GroupKeyResolver;
pub use model::{Dated, Revision};
pub use panel::{LocaleChanges, PanelInputs, RevisionEvent, RevisionsPanel};
pub use relative_date::{RelativeAge, RelativeDatePolicy};
pub use slug::slugify;
