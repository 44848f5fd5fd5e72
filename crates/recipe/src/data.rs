//! Compiled-in catalog data.

use diabetcare_shared::MealSlot;

use crate::Recipe;

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: u32,
    name: &str,
    category: MealSlot,
    cook_time: &str,
    calories: u32,
    carbs: u32,
    sugar: u32,
    description: &str,
    ingredients: &[&str],
    image: &str,
) -> Recipe {
    Recipe {
        id,
        name: name.to_owned(),
        category,
        cook_time: cook_time.to_owned(),
        calories,
        carbs,
        sugar,
        description: description.to_owned(),
        ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
        image: image.to_owned(),
    }
}

pub(crate) fn recipes() -> Vec<Recipe> {
    use MealSlot::*;

    vec![
        recipe(
            1,
            "Greek Yogurt Berry Bowl",
            Breakfast,
            "5 min",
            220,
            24,
            16,
            "Creamy Greek yogurt topped with fresh berries and a sprinkle of chia seeds for a protein-rich start to the day.",
            &[
                "Plain Greek yogurt",
                "Blueberries",
                "Strawberries",
                "Chia seeds",
                "Chopped almonds",
            ],
            "/static/images/greek-yogurt-berry-bowl.svg",
        ),
        recipe(
            2,
            "Veggie Egg Scramble",
            Breakfast,
            "15 min",
            260,
            9,
            4,
            "Fluffy scrambled eggs with spinach, bell pepper and mushrooms, finished with a little feta.",
            &[
                "Eggs",
                "Baby spinach",
                "Red bell pepper",
                "Mushrooms",
                "Feta cheese",
                "Olive oil",
            ],
            "/static/images/veggie-egg-scramble.svg",
        ),
        recipe(
            3,
            "Overnight Steel-Cut Oats",
            Breakfast,
            "10 min + overnight",
            290,
            38,
            7,
            "Slow-digesting steel-cut oats soaked overnight with cinnamon, walnuts and a few raspberries.",
            &[
                "Steel-cut oats",
                "Unsweetened almond milk",
                "Cinnamon",
                "Walnuts",
                "Raspberries",
            ],
            "/static/images/overnight-oats.svg",
        ),
        recipe(
            4,
            "Avocado Egg Toast",
            Breakfast,
            "10 min",
            310,
            26,
            3,
            "Whole-grain toast with smashed avocado and a poached egg; healthy fats keep the glucose curve flat.",
            &[
                "Whole-grain bread",
                "Avocado",
                "Egg",
                "Lemon juice",
                "Chili flakes",
            ],
            "/static/images/avocado-egg-toast.svg",
        ),
        recipe(
            5,
            "Grilled Chicken Salad",
            Lunch,
            "20 min",
            340,
            14,
            6,
            "Grilled chicken breast over mixed greens with cucumber, cherry tomatoes and an olive-oil vinaigrette.",
            &[
                "Chicken breast",
                "Mixed greens",
                "Cucumber",
                "Cherry tomatoes",
                "Olive oil",
                "Red wine vinegar",
            ],
            "/static/images/grilled-chicken-salad.svg",
        ),
        recipe(
            6,
            "Quinoa Vegetable Bowl",
            Lunch,
            "25 min",
            380,
            48,
            8,
            "Fiber-rich quinoa with roasted chickpeas, kale and tahini dressing for steady midday energy.",
            &[
                "Quinoa",
                "Chickpeas",
                "Kale",
                "Carrot",
                "Tahini",
                "Lemon juice",
            ],
            "/static/images/quinoa-vegetable-bowl.svg",
        ),
        recipe(
            7,
            "Turkey Lettuce Wraps",
            Lunch,
            "15 min",
            290,
            12,
            5,
            "Seasoned ground turkey and crunchy vegetables wrapped in butter lettuce instead of tortillas.",
            &[
                "Ground turkey",
                "Butter lettuce",
                "Water chestnuts",
                "Scallions",
                "Low-sodium soy sauce",
                "Ginger",
            ],
            "/static/images/turkey-lettuce-wraps.svg",
        ),
        recipe(
            8,
            "Hearty Lentil Soup",
            Lunch,
            "40 min",
            320,
            42,
            9,
            "Slow-simmered lentils with celery, carrot and tomato; plant protein and fiber in one bowl.",
            &[
                "Green lentils",
                "Celery",
                "Carrot",
                "Diced tomatoes",
                "Onion",
                "Vegetable broth",
            ],
            "/static/images/lentil-soup.svg",
        ),
        recipe(
            9,
            "Baked Salmon with Roasted Vegetables",
            Dinner,
            "30 min",
            420,
            18,
            7,
            "Omega-3-rich salmon fillet baked alongside broccoli and bell pepper with garlic and herbs.",
            &[
                "Salmon fillet",
                "Broccoli",
                "Bell pepper",
                "Garlic",
                "Olive oil",
                "Dill",
            ],
            "/static/images/baked-salmon.svg",
        ),
        recipe(
            10,
            "Zucchini Noodle Stir-Fry",
            Dinner,
            "20 min",
            310,
            16,
            9,
            "Spiralized zucchini tossed with shrimp and a light garlic-ginger sauce; pasta texture without the spike.",
            &[
                "Zucchini",
                "Shrimp",
                "Garlic",
                "Ginger",
                "Sesame oil",
                "Low-sodium soy sauce",
            ],
            "/static/images/zucchini-noodle-stir-fry.svg",
        ),
        recipe(
            11,
            "Herb-Crusted Chicken Breast",
            Dinner,
            "35 min",
            390,
            10,
            2,
            "Chicken breast with an almond-herb crust, served with steamed green beans.",
            &[
                "Chicken breast",
                "Almond flour",
                "Parsley",
                "Thyme",
                "Green beans",
                "Olive oil",
            ],
            "/static/images/herb-crusted-chicken.svg",
        ),
        recipe(
            12,
            "Cauliflower Rice Burrito Bowl",
            Dinner,
            "25 min",
            360,
            28,
            6,
            "Riced cauliflower with black beans, peppers, salsa and avocado; all the burrito flavor at a fraction of the carbs.",
            &[
                "Cauliflower rice",
                "Black beans",
                "Bell pepper",
                "Salsa",
                "Avocado",
                "Cilantro",
            ],
            "/static/images/cauliflower-burrito-bowl.svg",
        ),
    ]
}
