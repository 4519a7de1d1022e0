use shop_sketch::adapters::load_products;
use shop_sketch::domain::model::{Product, ProductCategory};
use shop_sketch::{Catalog, Search};
use std::io::Write;
use tempfile::NamedTempFile;

fn product(id: &str, name: &str, category: &str) -> Product {
    Product {
        product_id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        price: 999,
        category: ProductCategory::new(category, ""),
        available_item_count: 1,
        seller: "seller".to_string(),
    }
}

#[test]
fn test_search_returns_exactly_what_was_indexed() {
    let mut catalog = Catalog::new();
    let indexed = vec![product("p-2", "X", "A"), product("p-1", "X", "B")];
    catalog.index_by_name("X", indexed.clone());

    assert_eq!(catalog.search_products_by_name("X"), indexed.as_slice());
    assert!(catalog.search_products_by_name("Y").is_empty());
}

#[test]
fn test_reindexing_replaces_the_sequence() {
    let mut catalog = Catalog::new();
    catalog.index_by_name("X", vec![product("p-1", "X", "A")]);
    catalog.index_by_name("X", vec![product("p-9", "X", "A")]);

    let results = catalog.search_products_by_name("X");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].product_id, "p-9");
}

#[test]
fn test_category_index_ignores_name_index() {
    let mut catalog = Catalog::new();
    catalog.index_by_category("Garden", vec![product("p-1", "Hose", "Garden")]);
    catalog.index_by_name("Rake", vec![product("p-2", "Rake", "Garden")]);

    let garden = catalog.search_products_by_category("Garden");
    assert_eq!(garden.len(), 1);
    assert_eq!(garden[0].product_id, "p-1");
    assert!(catalog.search_products_by_name("Hose").is_empty());
}

#[test]
fn test_catalog_from_csv_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(
            b"product_id,name,description,price,category,available_count,seller\n\
              p-1,Kettle,Steel kettle,3500,Kitchen,3,bob\n\
              p-2,Mug,,800,Kitchen,40,bob\n\
              p-3,Kettle,Glass kettle,4200,Kitchen,0,carol\n",
        )
        .unwrap();

    let products = load_products(temp_file.path()).unwrap();
    let catalog = Catalog::from_products(products);

    let kettles: Vec<&str> = catalog
        .search_products_by_name("Kettle")
        .iter()
        .map(|p| p.seller.as_str())
        .collect();
    assert_eq!(kettles, vec!["bob", "carol"]);
    assert_eq!(catalog.search_products_by_category("Kitchen").len(), 3);
    assert!(catalog.search_products_by_category("Garden").is_empty());
}
