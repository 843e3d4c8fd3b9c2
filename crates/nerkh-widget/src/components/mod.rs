pub(crate) mod asset_card;
pub(crate) mod asset_strip;
pub(crate) mod asset_table;
pub(crate) mod atoms;
pub(crate) mod loading;
