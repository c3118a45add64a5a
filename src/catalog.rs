// src/catalog.rs
use crate::models::product::Product;

/// Fixed placeholder catalog, used to seed an empty `products` table on
/// first run and as the offline fallback when the table is unreachable.
pub fn placeholder_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Classic Notebook".to_string(),
            description: "High-quality ruled notebook perfect for writing and note-taking."
                .to_string(),
            price: 25000,
            icon: "fas fa-book".to_string(),
            category: "Notebooks".to_string(),
        },
        Product {
            id: 2,
            name: "Premium Pen Set".to_string(),
            description: "Professional ballpoint pen set with smooth ink flow.".to_string(),
            price: 45000,
            icon: "fas fa-pen".to_string(),
            category: "Pens".to_string(),
        },
        Product {
            id: 3,
            name: "Colored Pencils".to_string(),
            description: "24-color pencil set for artistic and creative work.".to_string(),
            price: 35000,
            icon: "fas fa-palette".to_string(),
            category: "Art Supplies".to_string(),
        },
        Product {
            id: 4,
            name: "Study Guide Book".to_string(),
            description: "Comprehensive study guide for academic excellence.".to_string(),
            price: 75000,
            icon: "fas fa-graduation-cap".to_string(),
            category: "Books".to_string(),
        },
        Product {
            id: 5,
            name: "Highlighter Set".to_string(),
            description: "6-color highlighter set for marking important text.".to_string(),
            price: 20000,
            icon: "fas fa-marker".to_string(),
            category: "Markers".to_string(),
        },
        Product {
            id: 6,
            name: "Leather Portfolio".to_string(),
            description: "Professional leather portfolio bag for documents.".to_string(),
            price: 120000,
            icon: "fas fa-briefcase".to_string(),
            category: "Bags".to_string(),
        },
        Product {
            id: 7,
            name: "Sticky Notes Pack".to_string(),
            description: "Multicolor sticky notes for organization and reminders.".to_string(),
            price: 15000,
            icon: "fas fa-sticky-note".to_string(),
            category: "Organization".to_string(),
        },
        Product {
            id: 8,
            name: "Scientific Calculator".to_string(),
            description: "Advanced calculator for mathematical computations.".to_string(),
            price: 85000,
            icon: "fas fa-calculator".to_string(),
            category: "Electronics".to_string(),
        },
    ]
}
