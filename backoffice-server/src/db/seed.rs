//! 示例数据填充 (开发工具)
//!
//! `GET /api/seed` 的实现：清空 menu_item 和 order 两张表，
//! 写入固定的 12 个菜单项和 10 笔示例订单。订单行使用创建时的
//! 菜单价格作为快照，totalAmount 由快照重算。

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{Category, MenuItem, Order, OrderItem, OrderStatus};
use crate::db::repository::order::generate_order_number;
use crate::db::repository::{MenuItemRepository, OrderRepository};
use crate::money;
use crate::utils::AppError;
use crate::utils::time::now_millis;

/// 填充结果统计
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub menu_items: usize,
    pub orders: usize,
}

struct MenuSeed {
    name: &'static str,
    description: &'static str,
    category: Category,
    price: f64,
    ingredients: &'static [&'static str],
    preparation_time: i32,
}

const MENU_SEEDS: &[MenuSeed] = &[
    MenuSeed {
        name: "Garlic Bread",
        description: "Freshly baked bread with garlic butter and herbs",
        category: Category::Appetizer,
        price: 199.0,
        ingredients: &["French Bread", "Garlic", "Butter", "Parsley", "Oregano"],
        preparation_time: 10,
    },
    MenuSeed {
        name: "Caesar Salad",
        description: "Crisp romaine lettuce with Caesar dressing, croutons, and parmesan",
        category: Category::Appetizer,
        price: 299.0,
        ingredients: &[
            "Romaine Lettuce",
            "Croutons",
            "Parmesan Cheese",
            "Caesar Dressing",
            "Lemon Juice",
        ],
        preparation_time: 15,
    },
    MenuSeed {
        name: "Grilled Salmon",
        description: "Atlantic salmon fillet grilled to perfection with lemon butter sauce",
        category: Category::MainCourse,
        price: 899.0,
        ingredients: &["Salmon Fillet", "Lemon", "Butter", "Dill", "Garlic", "Olive Oil"],
        preparation_time: 25,
    },
    MenuSeed {
        name: "Beef Burger",
        description: "Juicy Angus beef patty with cheese, fresh veggies, and special sauce",
        category: Category::MainCourse,
        price: 449.0,
        ingredients: &[
            "Angus Beef Patty",
            "Cheddar Cheese",
            "Lettuce",
            "Tomato",
            "Onion",
            "Pickles",
            "Burger Bun",
        ],
        preparation_time: 20,
    },
    MenuSeed {
        name: "Margherita Pizza",
        description: "Classic pizza with fresh mozzarella, tomato sauce, and basil",
        category: Category::MainCourse,
        price: 349.0,
        ingredients: &[
            "Pizza Dough",
            "Tomato Sauce",
            "Mozzarella Cheese",
            "Fresh Basil",
            "Olive Oil",
        ],
        preparation_time: 15,
    },
    MenuSeed {
        name: "Chicken Alfredo Pasta",
        description: "Fettuccine pasta with creamy Alfredo sauce and grilled chicken",
        category: Category::MainCourse,
        price: 399.0,
        ingredients: &[
            "Fettuccine",
            "Chicken Breast",
            "Heavy Cream",
            "Parmesan Cheese",
            "Garlic",
            "Butter",
        ],
        preparation_time: 22,
    },
    MenuSeed {
        name: "Chocolate Lava Cake",
        description: "Warm chocolate cake with a molten chocolate center, served with vanilla ice cream",
        category: Category::Dessert,
        price: 249.0,
        ingredients: &[
            "Dark Chocolate",
            "Butter",
            "Eggs",
            "Sugar",
            "Flour",
            "Vanilla Ice Cream",
        ],
        preparation_time: 15,
    },
    MenuSeed {
        name: "New York Cheesecake",
        description: "Classic creamy cheesecake with graham cracker crust",
        category: Category::Dessert,
        price: 279.0,
        ingredients: &[
            "Cream Cheese",
            "Graham Crackers",
            "Sugar",
            "Eggs",
            "Sour Cream",
            "Vanilla",
        ],
        preparation_time: 10,
    },
    MenuSeed {
        name: "Cappuccino",
        description: "Freshly brewed espresso with steamed milk foam",
        category: Category::Beverage,
        price: 149.0,
        ingredients: &["Espresso", "Steamed Milk", "Milk Foam", "Cocoa Powder"],
        preparation_time: 5,
    },
    MenuSeed {
        name: "Fresh Orange Juice",
        description: "Freshly squeezed orange juice served chilled",
        category: Category::Beverage,
        price: 179.0,
        ingredients: &["Fresh Oranges"],
        preparation_time: 5,
    },
    MenuSeed {
        name: "Mojito Mocktail",
        description: "Refreshing mint and lime mocktail",
        category: Category::Beverage,
        price: 199.0,
        ingredients: &["Fresh Mint", "Lime", "Sugar", "Soda Water", "Crushed Ice"],
        preparation_time: 8,
    },
    MenuSeed {
        name: "Sparkling Water",
        description: "Premium sparkling water with lemon slice",
        category: Category::Beverage,
        price: 99.0,
        ingredients: &["Sparkling Water", "Lemon Slice"],
        preparation_time: 2,
    },
];

struct OrderSeed {
    /// (菜单项下标, 数量)
    lines: &'static [(usize, i32)],
    customer_name: &'static str,
    table_number: i32,
    status: OrderStatus,
    notes: Option<&'static str>,
}

const ORDER_SEEDS: &[OrderSeed] = &[
    OrderSeed {
        lines: &[(0, 2), (2, 1), (6, 1)],
        customer_name: "John Doe",
        table_number: 5,
        status: OrderStatus::Delivered,
        notes: Some("Extra napkins please"),
    },
    OrderSeed {
        lines: &[(1, 1), (3, 2), (7, 1)],
        customer_name: "Jane Smith",
        table_number: 3,
        status: OrderStatus::Preparing,
        notes: None,
    },
    OrderSeed {
        lines: &[(4, 1), (9, 2)],
        customer_name: "Bob Johnson",
        table_number: 8,
        status: OrderStatus::Ready,
        notes: None,
    },
    OrderSeed {
        lines: &[(5, 3), (8, 3)],
        customer_name: "Alice Brown",
        table_number: 12,
        status: OrderStatus::Pending,
        notes: Some("No onions in the pasta please"),
    },
    OrderSeed {
        lines: &[(2, 2), (10, 4)],
        customer_name: "Charlie Wilson",
        table_number: 6,
        status: OrderStatus::Delivered,
        notes: None,
    },
    OrderSeed {
        lines: &[(1, 3), (11, 3)],
        customer_name: "David Lee",
        table_number: 4,
        status: OrderStatus::Cancelled,
        notes: Some("Customer requested cancellation"),
    },
    OrderSeed {
        lines: &[(3, 1), (4, 1), (6, 2)],
        customer_name: "Emma Davis",
        table_number: 9,
        status: OrderStatus::Delivered,
        notes: None,
    },
    OrderSeed {
        lines: &[(0, 4), (5, 2)],
        customer_name: "Frank Miller",
        table_number: 11,
        status: OrderStatus::Preparing,
        notes: None,
    },
    OrderSeed {
        lines: &[(7, 1), (9, 1)],
        customer_name: "Grace Taylor",
        table_number: 7,
        status: OrderStatus::Ready,
        notes: None,
    },
    OrderSeed {
        lines: &[(8, 5), (10, 5)],
        customer_name: "Henry Clark",
        table_number: 2,
        status: OrderStatus::Pending,
        notes: Some("All drinks with no sugar"),
    },
];

/// 清空并重建示例数据
pub async fn run(db: &Surreal<Db>) -> Result<SeedSummary, AppError> {
    db.query("DELETE menu_item; DELETE order;")
        .await
        .map_err(|e| AppError::database(format!("Failed to clear tables: {e}")))?;

    let menu_repo = MenuItemRepository::new(db.clone());
    let order_repo = OrderRepository::new(db.clone());

    let mut created_items = Vec::with_capacity(MENU_SEEDS.len());
    for seed in MENU_SEEDS {
        let mut item = MenuItem::new(seed.name.to_string(), seed.category, seed.price);
        item.description = seed.description.to_string();
        item.ingredients = seed.ingredients.iter().map(|s| s.to_string()).collect();
        item.preparation_time = seed.preparation_time;
        created_items.push(menu_repo.create(item).await?);
    }

    let mut order_count = 0;
    for seed in ORDER_SEEDS {
        let mut lines = Vec::with_capacity(seed.lines.len());
        for &(index, quantity) in seed.lines {
            let menu = &created_items[index];
            let id = menu
                .id
                .clone()
                .ok_or_else(|| AppError::database("Seeded menu item missing id"))?;
            lines.push(OrderItem {
                menu_item: id,
                quantity,
                price: menu.price,
            });
        }

        let total_amount = money::order_total(&lines);
        let now = now_millis();
        order_repo
            .insert(Order {
                id: None,
                order_number: generate_order_number(),
                items: lines,
                total_amount,
                status: seed.status,
                customer_name: seed.customer_name.to_string(),
                table_number: seed.table_number,
                notes: seed.notes.map(|s| s.to_string()),
                created_at: now,
                updated_at: now,
            })
            .await?;
        order_count += 1;
    }

    Ok(SeedSummary {
        menu_items: created_items.len(),
        orders: order_count,
    })
}
