//! Shop-by-category tiles shown on the landing page.

use serde::Serialize;

use dove_catalog::{CatalogView, Category, Selection};
use dove_core::{DomainResult, Entity, TileId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTile {
    pub id: TileId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub badge: String,
    pub category: Category,
}

impl Entity for CategoryTile {
    type Id = TileId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl CategoryTile {
    /// Following a tile narrows the collections grid to its department.
    pub fn apply_to(&self, view: &mut CatalogView) {
        view.set_category(Selection::Only(self.category));
    }
}

fn tile(
    id: &str,
    title: &str,
    description: &str,
    image: &str,
    badge: &str,
    category: Category,
) -> DomainResult<CategoryTile> {
    Ok(CategoryTile {
        id: TileId::new(id)?,
        title: title.to_owned(),
        description: description.to_owned(),
        image: image.to_owned(),
        link: format!("/collections/{}", category.label().to_lowercase()),
        badge: badge.to_owned(),
        category,
    })
}

pub fn featured_tiles() -> DomainResult<Vec<CategoryTile>> {
    Ok(vec![
        tile(
            "womens-apparel",
            "Women's Apparel",
            "Elegant Ankara dresses and kaftans",
            "/images/womens-african-apparel.jpg",
            "New Arrivals",
            Category::Womens,
        )?,
        tile(
            "mens-apparel",
            "Men's Apparel",
            "Stylish dashikis and tailored suits",
            "/images/mens-african-apparel.jpg",
            "Best Sellers",
            Category::Mens,
        )?,
        tile(
            "accessories",
            "Accessories",
            "Vibrant headwraps and jewelry",
            "/images/african-accessories.jpg",
            "Limited Edition",
            Category::Accessories,
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use dove_catalog::seed::default_catalog;

    #[test]
    fn three_tiles_one_per_department() {
        let tiles = featured_tiles().unwrap();
        let categories: Vec<Category> = tiles.iter().map(|t| t.category).collect();
        assert_eq!(categories, vec![Category::Womens, Category::Mens, Category::Accessories]);
        assert_eq!(tiles[0].link, "/collections/womens");
        assert_eq!(tiles[1].id().as_str(), "mens-apparel");
    }

    #[test]
    fn tile_filters_the_grid() {
        let tiles = featured_tiles().unwrap();
        let mut view = CatalogView::new(Arc::new(default_catalog().unwrap()));
        view.load_more();

        tiles[2].apply_to(&mut view);
        assert_eq!(view.criteria().category, Selection::Only(Category::Accessories));
        assert!(view.filtered().all(|e| e.category == Category::Accessories));
        assert!(view.visible_count() <= view.page_size());
    }
}
