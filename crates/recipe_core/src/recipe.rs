pub type RecipeId = u64;

/// A recipe as held by the browser. Replaced wholesale on reload, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub youtube_url: String,
    pub cooking_time: Option<String>,
    pub servings: Option<String>,
    /// Ingredient lines in extraction order.
    pub ingredients: Vec<String>,
    /// Steps in execution order.
    pub instructions: Vec<String>,
    /// Server timestamp text, display only.
    pub created_at: Option<String>,
}
