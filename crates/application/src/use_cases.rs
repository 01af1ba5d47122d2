use std::path::PathBuf;

use wardrobe_domain::{Category, Direction, DisplaySize};

#[derive(Debug, Clone)]
pub struct LoadWardrobeCommand {
    pub tops_folder: PathBuf,
    pub bottoms_folder: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderSelectionCommand {
    pub category: Category,
    pub size: DisplaySize,
}

#[derive(Debug, Clone, Copy)]
pub struct StepCategoryCommand {
    pub category: Category,
    pub direction: Direction,
    pub size: DisplaySize,
}

#[derive(Debug, Clone)]
pub struct CreateOutfitCommand {
    pub sound_effect: PathBuf,
    pub size: DisplaySize,
}

#[derive(Debug, Clone, Copy)]
pub struct PickOutfitCommand;
