/// Things the user can ask for by button or hotkey, as opposed to by pointer.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Hash,
    PartialEq,
    Eq,
    strum::AsRefStr,
    strum::EnumIter,
    Clone,
    Copy,
    Debug,
)]
pub enum Action {
    Undo,
    BrushSmaller,
    BrushLarger,
    Save,
    Load,
}
