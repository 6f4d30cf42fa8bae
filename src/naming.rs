use heck::{ToSnakeCase, ToUpperCamelCase};

/// Derives the model name from whatever the user typed on the command line:
/// `Post`, `PostRepository` and `post_repository` all mean `Post`.
pub fn model_name(input: &str) -> String {
    let camel = input.to_upper_camel_case();
    match camel.strip_suffix("Repository") {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => camel,
    }
}

/// Table name conventionally backing a model: snake_case, pluralized.
pub fn table_name(model_name: &str) -> String {
    pluralize(&model_name.to_snake_case())
}

pub fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.is_empty() && !ends_with_vowel(stem) {
            return format!("{}ies", stem);
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|tail| word.ends_with(tail)) {
        return format!("{}es", word);
    }
    format!("{}s", word)
}

pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{}y", stem);
        }
    }
    if ["ses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|tail| word.ends_with(tail))
    {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn ends_with_vowel(word: &str) -> bool {
    word.chars()
        .last()
        .map_or(false, |c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn model_name_strips_the_repository_suffix() {
        assert_eq!(model_name("PostRepository"), "Post");
        assert_eq!(model_name("post_repository"), "Post");
        assert_eq!(model_name("Comment"), "Comment");
        assert_eq!(model_name("blog_post"), "BlogPost");
        assert_eq!(model_name("Repository"), "Repository");
    }

    #[test]
    fn table_name_is_plural_snake_case() {
        assert_eq!(table_name("Post"), "posts");
        assert_eq!(table_name("BlogCategory"), "blog_categories");
    }

    #[test]
    fn pluralize_covers_the_regular_families() {
        assert_eq!(pluralize("user"), "users");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("status"), "statuses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("branch"), "branches");
    }

    #[test]
    fn singularize_strips_plural_suffixes() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("branches"), "branch");
        assert_eq!(singularize("comment"), "comment");
        assert_eq!(singularize("address"), "address");
    }
}
