//! The default keyword table served when no catalog file is configured.

use super::types::{Catalog, Category, Tool};

type ToolRow = (&'static str, &'static str, &'static str);
type CategoryRow = (&'static str, &'static [&'static str], &'static [ToolRow]);

const BUILTIN: &[CategoryRow] = &[
    (
        "health",
        &["health", "fitness", "wellness", "medical", "exercise", "diet", "nutrition"],
        &[
            (
                "Healthify",
                "https://www.healthifyme.com/",
                "1. Download the app or visit website. 2. Create an account. 3. Input your health goals. 4. Chat with the AI nutritionist for personalized diet plans. 5. Track your meals and get instant feedback.",
            ),
            (
                "Ada Health",
                "https://ada.com/",
                "1. Install the Ada app. 2. Start a symptom assessment by describing your condition. 3. Answer AI-guided questions. 4. Get AI-powered health insights. 5. Share results with your doctor.",
            ),
        ],
    ),
    (
        "finance",
        &["money", "finance", "investment", "budget", "saving", "trading", "crypto"],
        &[
            (
                "Cleo AI",
                "https://web.meetcleo.com/",
                "1. Sign up and connect your bank account securely. 2. Chat with Cleo about your spending. 3. Get personalized budget recommendations. 4. Use AI to find savings opportunities. 5. Set financial goals and track progress.",
            ),
            (
                "ChatGPT for Finance",
                "https://chat.openai.com/",
                "1. Create an OpenAI account. 2. Ask questions about budgeting, investing, or financial planning. 3. Request personalized financial advice. 4. Get help analyzing your expenses. 5. Learn about different investment strategies.",
            ),
        ],
    ),
    (
        "development",
        &["development", "coding", "programming", "software", "web", "app", "developer"],
        &[
            (
                "GitHub Copilot",
                "https://github.com/features/copilot",
                "1. Install Copilot extension in your IDE (VS Code, etc.). 2. Sign in with GitHub account. 3. Start coding and Copilot suggests completions. 4. Accept suggestions with Tab. 5. Use comments to describe what you want to build.",
            ),
            (
                "Claude Code",
                "https://claude.ai/",
                "1. Visit Claude.ai and sign up. 2. Describe your coding project. 3. Ask for code examples or debugging help. 4. Request code reviews and optimizations. 5. Get explanations of complex programming concepts.",
            ),
        ],
    ),
    (
        "writing",
        &["writing", "content", "blog", "article", "copywriting", "text"],
        &[
            (
                "Jasper AI",
                "https://www.jasper.ai/",
                "1. Create a Jasper account. 2. Choose a template (blog post, ad copy, etc.). 3. Input your topic and key points. 4. Let AI generate content. 5. Edit and refine the output.",
            ),
            (
                "Grammarly",
                "https://www.grammarly.com/",
                "1. Install Grammarly extension. 2. Write in any text field. 3. Get real-time grammar and style suggestions. 4. Accept AI-powered corrections. 5. Improve your writing clarity and tone.",
            ),
        ],
    ),
    (
        "design",
        &["design", "graphic", "image", "art", "creative", "logo", "visual"],
        &[
            (
                "Canva AI",
                "https://www.canva.com/",
                "1. Sign up for Canva. 2. Use Magic Design to generate designs. 3. Try Text to Image for custom graphics. 4. Use Magic Eraser to remove objects. 5. Generate professional designs in seconds.",
            ),
            (
                "Midjourney",
                "https://www.midjourney.com/",
                "1. Join the Discord server. 2. Use /imagine command with your description. 3. Wait for AI to generate 4 variations. 4. Upscale your favorite. 5. Download and use your AI-generated art.",
            ),
        ],
    ),
    (
        "learning",
        &["learning", "education", "study", "tutorial", "course", "teach"],
        &[
            (
                "Khan Academy AI",
                "https://www.khanacademy.org/",
                "1. Create a free account. 2. Choose your subject. 3. Use Khanmigo AI tutor for help. 4. Get personalized learning recommendations. 5. Practice with AI-guided exercises.",
            ),
            (
                "ChatGPT",
                "https://chat.openai.com/",
                "1. Sign up for free. 2. Ask to explain any concept. 3. Request study guides or summaries. 4. Get practice problems with solutions. 5. Learn at your own pace with AI assistance.",
            ),
        ],
    ),
    (
        "productivity",
        &["productivity", "organize", "task", "planning", "automation", "workflow"],
        &[
            (
                "Notion AI",
                "https://www.notion.so/",
                "1. Create Notion account. 2. Start a new page. 3. Use /ai command for AI assistance. 4. Ask AI to write, summarize, or organize. 5. Automate your workflow with AI suggestions.",
            ),
            (
                "Zapier AI",
                "https://zapier.com/",
                "1. Sign up for Zapier. 2. Connect your apps. 3. Describe your workflow in plain English. 4. Let AI build automation. 5. Activate and save hours of manual work.",
            ),
        ],
    ),
];

impl Catalog {
    /// The built-in seven-category table.
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, keywords, tools)| {
                Category::new(
                    *name,
                    keywords.iter().copied(),
                    tools
                        .iter()
                        .map(|(tool, url, usage)| Tool::new(*tool, *url, *usage))
                        .collect(),
                )
            })
            .collect();
        // The table is lowercase, non-empty and uses absolute URLs; skip validation.
        Self::from_validated(categories)
    }
}
