mod item;

pub use item::FoodItem;
