use crate::routes::Route;

/// What a view-model needs from whoever is presenting it.
pub trait Interaction {
    /// Ask the user to confirm a destructive action.
    fn confirm(&mut self, message: &str) -> bool;

    fn alert(&mut self, message: &str);

    fn navigate(&mut self, route: Route);
}
