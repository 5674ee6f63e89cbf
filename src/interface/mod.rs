pub mod menu;
pub mod prompts;
pub mod render;
pub mod validation;

pub use menu::MenuAction;
pub use prompts::{
    prompt_best_before, prompt_food_name, prompt_menu_action, prompt_search_name,
    prompt_storage_mode, prompt_weight,
};
pub use render::{
    format_added, format_full, format_info, format_peek, format_removed, format_search_result,
};
pub use validation::{
    canonical_food_name, parse_best_before, parse_menu_choice, parse_weight, suggest_food_name,
};
