use crate::navigation::Cursor;
use crate::{Recipe, RecipeId};

/// Ordered recipe collection plus the cursor into it.
///
/// The collection only changes through [`RecipeStore::replace`], which also
/// resets the cursor, so no reader can pair a cursor with a collection of a
/// different length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    cursor: Cursor,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a freshly fetched collection, keeping server order.
    pub fn replace(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        self.cursor.reset();
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor.index(self.recipes.len())
    }

    pub fn current(&self) -> Option<&Recipe> {
        self.current_index().and_then(|index| self.recipes.get(index))
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.recipes.iter().any(|recipe| recipe.id == id)
    }

    pub fn previous(&mut self) {
        self.cursor.previous(self.recipes.len());
    }

    pub fn next(&mut self) {
        self.cursor.next(self.recipes.len());
    }

    pub fn jump_to(&mut self, index: usize) {
        self.cursor.jump_to(index, self.recipes.len());
    }
}
