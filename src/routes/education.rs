use axum::response::IntoResponse;

use crate::template::Template;

pub struct Article {
    pub title: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub excerpt: &'static str,
    pub paragraphs: Vec<&'static str>,
}

#[derive(askama::Template)]
#[template(path = "education.html")]
pub struct EducationTemplate {
    pub current_path: String,
    pub articles: Vec<Article>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(EducationTemplate {
        current_path: "education".to_owned(),
        articles: articles(),
    })
}

fn articles() -> Vec<Article> {
    vec![
        Article {
            title: "Understanding the Glycemic Index",
            category: "Nutrition Basics",
            read_time: "5 min read",
            excerpt: "Learn how different foods affect your blood sugar levels and make informed choices for better glucose control.",
            paragraphs: vec![
                "The glycemic index (GI) is a valuable tool for managing diabetes. It ranks foods from 0-100 based on how quickly they raise blood glucose levels. Foods with a low GI (55 or less) are digested slowly, causing a gradual rise in blood sugar. These include most vegetables, legumes, and whole grains.",
                "Medium GI foods (56-69) include sweet potatoes, brown rice, and whole wheat bread. High GI foods (70+) like white bread, potatoes, and sugary snacks cause rapid spikes in blood glucose.",
                "Focus on incorporating more low-GI foods into your meals to maintain stable blood sugar levels throughout the day.",
            ],
        },
        Article {
            title: "Smart Food Swaps for Diabetics",
            category: "Meal Planning",
            read_time: "4 min read",
            excerpt: "Simple ingredient substitutions that can significantly improve the nutritional profile of your favorite dishes.",
            paragraphs: vec![
                "Making small changes to your favorite recipes can have a big impact on blood sugar management: replace white rice with cauliflower rice or quinoa, use Greek yogurt instead of sour cream, swap regular pasta for zucchini noodles or shirataki noodles, choose almond flour over white flour for baking, use avocado or nut butters instead of butter, and replace sugary drinks with infused water or unsweetened tea.",
                "These swaps reduce carbohydrates and add beneficial nutrients like fiber, protein, and healthy fats.",
            ],
        },
        Article {
            title: "Emergency Low Blood Sugar Foods",
            category: "Emergency Care",
            read_time: "3 min read",
            excerpt: "Essential knowledge about treating hypoglycemia quickly and effectively with the right foods.",
            paragraphs: vec![
                "Hypoglycemia (blood sugar below 70 mg/dL) requires immediate treatment. The \"15-15 rule\" is your guide.",
                "Quick-acting carbohydrates (15g): 3-4 glucose tablets, 1/2 cup fruit juice, 1 tablespoon honey, 5-6 hard candies, or 1/2 cup regular soda.",
                "After treatment, wait 15 minutes and recheck blood sugar. If still low, repeat treatment. Once levels normalize, eat a small snack with protein and complex carbs to prevent another drop.",
                "Always carry emergency supplies and inform others about your condition.",
            ],
        },
        Article {
            title: "Meal Timing and Blood Sugar Control",
            category: "Lifestyle",
            read_time: "6 min read",
            excerpt: "How when you eat can be just as important as what you eat for optimal diabetes management.",
            paragraphs: vec![
                "Consistent meal timing helps regulate blood sugar levels and improves medication effectiveness: eat at regular intervals (every 3-4 hours), don't skip meals (especially if taking diabetes medication), consider smaller, more frequent meals to avoid large glucose spikes, and time meals with medication schedules as directed by your healthcare provider.",
                "Keep a food and glucose log to identify your optimal eating schedule and share findings with your healthcare team.",
            ],
        },
    ]
}
