mod enums;
mod item;
mod source;
mod category;

// 导出常用项
pub use enums::{RuleItemType, SourceDomainType};
pub use item::{dedup_items, RuleItem};
pub use source::{SourceDomain, SourceEntry};
pub use category::{CategoryCode, CategoryMap, ATTRIBUTE_SEPARATOR, NEGATION_MARKER, SEGMENT_SEPARATOR};
