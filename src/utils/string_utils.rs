//! # 문자열 유틸리티
//!
//! 요청 본문의 선택적 문자열 필드를 다루는 serde 헬퍼입니다.

use serde::Deserialize;

/// 빈 문자열을 `None`으로 취급합니다.
///
/// 공백 문자열은 값이 있는 것으로 보고 그대로 둡니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(non_empty(Some("".to_string())), None);
/// assert_eq!(non_empty(Some(" ".to_string())), Some(" ".to_string()));
/// ```
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `null`과 `""`는 `None`으로, 나머지 문자열은 그대로 `Some`으로 역직렬화합니다.
/// 필드 누락까지 `None`으로 받으려면 `#[serde(default)]`와 함께 사용합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Patch {
///     #[serde(default, deserialize_with = "deserialize_non_empty_string")]
///     email: Option<String>,
/// }
///
/// // {"email": "a@b.c"} → Some("a@b.c")
/// // {"email": ""}      → None
/// // {"email": null}    → None
/// // {}                 → None
/// ```
pub fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(non_empty(opt))
}
