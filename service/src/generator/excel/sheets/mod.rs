//! Individual sheet writers for the template workbook.

pub(super) mod data;
pub(super) mod docs;
pub(super) mod enums;
pub(super) mod meta;
