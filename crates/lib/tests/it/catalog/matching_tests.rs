//! Matching queries against the built-in catalog.

use std::sync::Arc;

use aiguide::{
    ThreadRandom,
    catalog::Catalog,
    constants::{FALLBACK_DESCRIPTION, FALLBACK_VIDEO_URL},
};

use crate::helpers::*;

#[test]
fn test_budget_query_always_recommends_finance_tool() {
    let matcher = matcher_with(Catalog::builtin(), Arc::new(ThreadRandom));

    for _ in 0..50 {
        let response = matcher.match_query("I need help with my budget");
        let tool = response.ai_tool.expect("matched query has a tool");
        assert!(
            ["Cleo AI", "ChatGPT for Finance"].contains(&tool.name.as_str()),
            "unexpected tool {}",
            tool.name
        );
        assert!(
            response
                .video_url
                .unwrap()
                .ends_with("search_query=budget%20AI%20tools%20tutorial")
        );
        assert!(response.description.contains("budget"));
    }
}

#[test]
fn test_scripted_random_picks_exact_tool() {
    let response = fixed_matcher(&[1]).match_query("Best tools for coding?");
    assert_eq!(response.ai_tool.unwrap().name, "Claude Code");

    let response = fixed_matcher(&[0]).match_query("Best tools for coding?");
    assert_eq!(response.ai_tool.unwrap().name, "GitHub Copilot");
}

#[test]
fn test_matching_is_case_insensitive() {
    let matcher = fixed_matcher(&[0]);
    let (category, keyword) = matcher.classify("FITNESS plans please").unwrap();
    assert_eq!(category.name, "health");
    assert_eq!(keyword, "fitness");

    let response = matcher.match_query("FITNESS plans please");
    assert_eq!(response.ai_tool.unwrap().name, "Healthify");
}

#[test]
fn test_earlier_category_wins() {
    // "diet" (health) and "budget" (finance) both occur; health is declared first.
    let matcher = fixed_matcher(&[0]);
    let (category, keyword) = matcher.classify("a budget diet").unwrap();
    assert_eq!(category.name, "health");
    assert_eq!(keyword, "diet");
}

#[test]
fn test_unmatched_query_gets_fallback() {
    let matcher = matcher_with(Catalog::builtin(), Arc::new(ThreadRandom));
    let all_tools: Vec<String> = matcher
        .catalog()
        .categories()
        .iter()
        .flat_map(|c| c.tools.iter().map(|t| t.name.clone()))
        .collect();

    for _ in 0..20 {
        let response = matcher.match_query("asdkjasd");
        assert_eq!(response.description, FALLBACK_DESCRIPTION);
        assert_eq!(response.video_url.as_deref(), Some(FALLBACK_VIDEO_URL));
        let tool = response.ai_tool.expect("fallback still recommends a tool");
        assert!(all_tools.contains(&tool.name));
    }
}

#[test]
fn test_fallback_with_scripted_random() {
    // Category index 3 is writing, tool index 1 is Grammarly.
    let response = fixed_matcher(&[3, 1]).match_query("zzz");
    assert_eq!(response.ai_tool.unwrap().name, "Grammarly");
}
