//! Message cell sizing and layout engine.
//!
//! Pure, synchronous geometry: given a message and its neighbors, derive
//! every slot's size within a variable-height list cell.
//!
//! # Module Structure
//!
//! - `geometry`: Size and inset value types
//! - `metrics`: Text block measurement capability
//! - `dates`: Day keys and label text for timestamps
//! - `role`: Incoming/outgoing classification and visibility rules
//! - `config`: Role-dependent layout constants
//! - `container`: Per-kind message container sizers
//! - `slots`: Per-slot size resolution
//! - `height`: Cell content height composition
//! - `style`: Container style decisions
//! - `policy`: Reference label-height policy
//! - `calculator`: Layout pass entry point

pub mod calculator;
pub mod config;
pub mod container;
pub mod dates;
pub mod geometry;
pub mod height;
pub mod metrics;
pub mod policy;
pub mod role;
pub mod slots;
pub mod style;

pub use calculator::{CellAttributes, CellSizeCalculator};
pub use config::{
    AccessoryPosition, AvatarPosition, HorizontalAnchor, LabelAlignment, LayoutConfiguration,
    RoleConfigs, TextAlignment, VerticalAnchor,
};
pub use container::{AnnouncementSizer, ContainerSizer, MediaSizer, SizerTable, TextSizer};
pub use dates::DateStamper;
pub use geometry::{EdgeInsets, HorizontalEdgeInsets, Size};
pub use height::{cell_content_height, HeightInputs};
pub use metrics::{label_size, MonospaceMeasurer, TextMeasurer};
pub use policy::{ConversationLabelPolicy, LabelHeights};
pub use role::{is_outgoing, Role, VisibilityRules};
pub use slots::{ElementSizeResolver, LabelHeightProvider, LabelSlot, LayoutContext, SlotSizes};
pub use style::{decide, resolve_style, Border, Corner, StyleDecision, StyleKind};
