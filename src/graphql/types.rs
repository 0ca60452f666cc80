use super::schema::get_store;
use crate::model::{self, GameEdit};
use async_graphql::{ComplexObject, Context, ID, InputObject, Object, SimpleObject};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Game {
    pub id: ID,
    pub title: String,
    pub platform: Vec<String>,
}

#[ComplexObject]
impl Game {
    /// Reviews written about this game
    async fn reviews(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Review>> {
        let store = get_store(ctx)?;
        Ok(store
            .reviews_for_game(&self.id)
            .into_iter()
            .map(Review::from)
            .collect())
    }
}

impl From<model::Game> for Game {
    fn from(g: model::Game) -> Self {
        Self {
            id: ID::from(g.id),
            title: g.title,
            platform: g.platform,
        }
    }
}

impl From<&model::Game> for Game {
    fn from(g: &model::Game) -> Self {
        g.clone().into()
    }
}

/// A review, resolved against the store it came from.
#[derive(Clone)]
pub struct Review(model::Review);

#[Object]
impl Review {
    async fn id(&self) -> ID {
        ID::from(self.0.id.clone())
    }

    async fn rating(&self) -> i32 {
        self.0.rating
    }

    async fn content(&self) -> String {
        self.0.content.clone()
    }

    /// The reviewed game, null once that game has been deleted
    async fn game(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Game>> {
        let store = get_store(ctx)?;
        Ok(store.game_for_review(&self.0).map(Game::from))
    }

    /// The review's author, null if no author has that id
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let store = get_store(ctx)?;
        Ok(store.author_for_review(&self.0).map(Author::from))
    }
}

impl From<&model::Review> for Review {
    fn from(r: &model::Review) -> Self {
        Self(r.clone())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub verified: bool,
}

#[ComplexObject]
impl Author {
    /// Reviews this author has written
    async fn reviews(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Review>> {
        let store = get_store(ctx)?;
        Ok(store
            .reviews_by_author(&self.id)
            .into_iter()
            .map(Review::from)
            .collect())
    }
}

impl From<&model::Author> for Author {
    fn from(a: &model::Author) -> Self {
        Self {
            id: ID::from(a.id.clone()),
            name: a.name.clone(),
            verified: a.verified,
        }
    }
}

#[derive(InputObject)]
pub struct AddGameInput {
    pub title: String,
    pub platform: Vec<String>,
}

#[derive(InputObject, Default)]
pub struct EditGameInput {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

impl From<EditGameInput> for GameEdit {
    fn from(e: EditGameInput) -> Self {
        Self {
            title: e.title,
            platform: e.platform,
        }
    }
}
