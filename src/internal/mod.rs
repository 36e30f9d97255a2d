/// Module that provides the translation between character indices and byte offsets.
mod char_index_map;
pub(crate) use char_index_map::CharIndexMap;
