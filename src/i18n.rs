//! Static UI strings for each supported language.

use serde::Serialize;

use crate::recipe::options::Language;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub ingredients_label: &'static str,
    pub ingredients_placeholder: &'static str,
    pub cuisine_label: &'static str,
    pub diet_label: &'static str,
    pub allergies_label: &'static str,
    pub course_label: &'static str,
    pub language_label: &'static str,
    pub generate_button: &'static str,
    pub generating_message: &'static str,
    pub error_title: &'static str,
    pub reset_button: &'static str,
    pub prep_time: &'static str,
    pub cook_time: &'static str,
    pub total_time: &'static str,
    pub servings: &'static str,
    pub ingredients: &'static str,
    pub pantry_staples: &'static str,
    pub instructions: &'static str,
}

static EN: Translations = Translations {
    title: "AI Recipe Generator",
    subtitle: "Tell us what you have, and we'll create a delicious recipe for you!",
    ingredients_label: "What ingredients do you have?",
    ingredients_placeholder: "e.g., chicken breast, tomatoes, rice",
    cuisine_label: "Cuisine Preference",
    diet_label: "Dietary Preference",
    allergies_label: "Allergies to Avoid",
    course_label: "Course Type",
    language_label: "Language",
    generate_button: "Generate Recipe",
    generating_message: "Creating your culinary masterpiece...",
    error_title: "Oops! Something went wrong.",
    reset_button: "Start Over",
    prep_time: "Prep Time",
    cook_time: "Cook Time",
    total_time: "Total Time",
    servings: "Servings",
    ingredients: "Ingredients",
    pantry_staples: "Pantry Staples",
    instructions: "Instructions",
};

static HE: Translations = Translations {
    title: "מחולל מתכונים AI",
    subtitle: "ספרו לנו מה יש לכם, ואנחנו ניצור עבורכם מתכון טעים!",
    ingredients_label: "אילו מצרכים יש לכם?",
    ingredients_placeholder: "למשל, חזה עוף, עגבניות, אורז",
    cuisine_label: "העדפת מטבח",
    diet_label: "העדפה תזונתית",
    allergies_label: "אלרגיות להימנע מהן",
    course_label: "סוג המנה",
    language_label: "שפה",
    generate_button: "צור מתכון",
    generating_message: "יוצרים את יצירת המופת הקולינרית שלכם...",
    error_title: "אופס! משהו השתבש.",
    reset_button: "התחל מחדש",
    prep_time: "זמן הכנה",
    cook_time: "זמן בישול",
    total_time: "זמן כולל",
    servings: "מנות",
    ingredients: "מצרכים",
    pantry_staples: "מצרכי מזווה",
    instructions: "הוראות",
};

static AR: Translations = Translations {
    title: "مولد وصفات الذكاء الاصطناعي",
    subtitle: "أخبرنا بما لديك، وسنصنع لك وصفة لذيذة!",
    ingredients_label: "ما هي المكونات التي لديك؟",
    ingredients_placeholder: "على سبيل المثال، صدر دجاج، طماطم، أرز",
    cuisine_label: "تفضيل المطبخ",
    diet_label: "تفضيل غذائي",
    allergies_label: "الحساسية التي يجب تجنبها",
    course_label: "نوع الطبق",
    language_label: "لغة",
    generate_button: "إنشاء وصفة",
    generating_message: "نصنع تحفتك الفنية في الطهي...",
    error_title: "عفوًا! حدث خطأ ما.",
    reset_button: "ابدأ من جديد",
    prep_time: "وقت التحضير",
    cook_time: "وقت الطهي",
    total_time: "الوقت الكلي",
    servings: "حصص",
    ingredients: "المكونات",
    pantry_staples: "أساسيات المخزن",
    instructions: "التعليمات",
};

pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::En => &EN,
        Language::He => &HE,
        Language::Ar => &AR,
    }
}

/// HTML `dir` attribute value for the language.
pub fn direction(lang: Language) -> &'static str {
    if lang.is_rtl() { "rtl" } else { "ltr" }
}
