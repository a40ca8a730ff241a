//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 도메인 엔티티의 필드 검증과 리포지토리의 대소문자 무시 비교에서 사용됩니다.

/// 문자열이 비어 있거나 공백만으로 구성되어 있는지 확인
///
/// 검증 규칙에서 "존재하지만 내용이 없는" 값을 판별할 때 사용합니다.
/// null(누락)과는 별개의 개념이며, 누락 여부는 `Option` 수준에서 처리합니다.
///
/// # 인자
/// * `value` - 확인할 문자열
///
/// # 반환값
/// * `true` - 빈 문자열이거나 공백만 있는 경우
/// * `false` - 내용이 있는 문자열
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_blank;
///
/// assert_eq!(is_blank(""), true);
/// assert_eq!(is_blank("   "), true);
/// assert_eq!(is_blank("Hello"), false);
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 문자열의 문자 수 계산
///
/// 바이트 수가 아닌 유니코드 스칼라 값 기준의 문자 수를 반환합니다.
/// 길이 제한 검증("최소 3자", "최대 100자")은 전부 이 함수를 기준으로 합니다.
///
/// # 인자
/// * `value` - 길이를 잴 문자열
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::char_count;
///
/// assert_eq!(char_count("abc"), 3);
/// assert_eq!(char_count("Meikäläinen"), 11);
/// assert_eq!(char_count("안녕하세요"), 5);
/// ```
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// 대소문자를 무시한 문자열 비교
///
/// 이메일 조회처럼 저장된 값과 입력값을 대소문자 구분 없이 맞춰볼 때 사용합니다.
/// ASCII 범위를 넘는 문자도 처리하도록 유니코드 소문자 변환을 기준으로 비교합니다.
///
/// # 인자
/// * `a` - 비교할 문자열
/// * `b` - 비교할 문자열
///
/// # 반환값
/// * `true` - 대소문자를 무시하면 같은 문자열
/// * `false` - 서로 다른 문자열
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::eq_ignore_case;
///
/// assert!(eq_ignore_case("Matti@Example.com", "matti@example.com"));
/// assert!(!eq_ignore_case("matti@example.com", "maija@example.com"));
/// ```
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        // 빈 값 케이스
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(is_blank(" \t \n "));

        // 내용이 있는 케이스
        assert!(!is_blank("Hello"));
        assert!(!is_blank("  World  "));
        assert!(!is_blank("0"));
        assert!(!is_blank("안녕하세요"));
    }

    #[test]
    fn test_char_count_ascii() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("a"), 1);
        assert_eq!(char_count("abc"), 3);
        assert_eq!(char_count("Hello World"), 11);
    }

    #[test]
    fn test_char_count_unicode() {
        // 핀란드어 이름 - ä는 1문자로 계산되어야 합니다
        assert_eq!(char_count("Meikäläinen"), 11);
        assert_eq!(char_count("Virtanen"), 8);

        // 한글
        assert_eq!(char_count("안녕하세요"), 5);
        assert_eq!(char_count("Hello 안녕"), 8);

        // 이모지 (단일 스칼라 값)
        assert_eq!(char_count("😀"), 1);
        assert_eq!(char_count("a😀b"), 3);
    }

    #[test]
    fn test_char_count_is_not_byte_count() {
        // UTF-8에서 "ä"는 2바이트, "안"은 3바이트지만 모두 1문자입니다
        assert_eq!("ä".len(), 2);
        assert_eq!(char_count("ä"), 1);
        assert_eq!("안".len(), 3);
        assert_eq!(char_count("안"), 1);
    }

    #[test]
    fn test_eq_ignore_case() {
        // 같은 문자열
        assert!(eq_ignore_case("hello", "hello"));
        assert!(eq_ignore_case("Hello", "hELLO"));
        assert!(eq_ignore_case("MATTI@EXAMPLE.COM", "matti@example.com"));
        assert!(eq_ignore_case("X@Y.com", "x@y.com"));

        // 다른 문자열
        assert!(!eq_ignore_case("matti@example.com", "maija@example.com"));
        assert!(!eq_ignore_case("hello", "hello "));
        assert!(!eq_ignore_case("", "a"));
    }

    #[test]
    fn test_eq_ignore_case_unicode() {
        // 비 ASCII 대소문자 변환
        assert!(eq_ignore_case("Ärjylä", "ärjylä"));
        assert!(eq_ignore_case("ÉCOLE", "école"));

        // 대소문자 구분이 없는 문자는 그대로 비교됩니다
        assert!(eq_ignore_case("안녕", "안녕"));
        assert!(!eq_ignore_case("안녕", "안녕하세요"));
    }
}
