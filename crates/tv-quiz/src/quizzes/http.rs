//! HTTP status codes.

use rand::Rng;
use rand::rngs::StdRng;

use tv_core::{Annotated, CoreResult, Field, QueryResult, Role, build_cross_query};

use super::{check_table, describe_table};
use crate::catalog::{Generator, Quiz};

struct Status {
    code: u16,
    message: &'static str,
}

impl Status {
    fn class(&self) -> &'static str {
        match self.code {
            100..=199 => "informational",
            200..=299 => "success",
            300..=399 => "redirection",
            400..=499 => "client error",
            _ => "server error",
        }
    }
}

impl Annotated for Status {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("code", Role::All, self.code),
            Field::new("message", Role::All, self.message),
            Field::new("class", Role::Guess, self.class()),
        ]
    }
}

const fn status(code: u16, message: &'static str) -> Status {
    Status { code, message }
}

static STATUSES: &[Status] = &[
    status(100, "Continue"),
    status(101, "Switching Protocols"),
    status(200, "OK"),
    status(201, "Created"),
    status(202, "Accepted"),
    status(204, "No Content"),
    status(206, "Partial Content"),
    status(301, "Moved Permanently"),
    status(302, "Found"),
    status(303, "See Other"),
    status(304, "Not Modified"),
    status(307, "Temporary Redirect"),
    status(308, "Permanent Redirect"),
    status(400, "Bad Request"),
    status(401, "Unauthorized"),
    status(403, "Forbidden"),
    status(404, "Not Found"),
    status(405, "Method Not Allowed"),
    status(406, "Not Acceptable"),
    status(408, "Request Timeout"),
    status(409, "Conflict"),
    status(410, "Gone"),
    status(415, "Unsupported Media Type"),
    status(418, "I'm a teapot"),
    status(429, "Too Many Requests"),
    status(500, "Internal Server Error"),
    status(501, "Not Implemented"),
    status(502, "Bad Gateway"),
    status(503, "Service Unavailable"),
    status(504, "Gateway Timeout"),
];

fn cross(rng: &mut StdRng) -> QueryResult {
    let status = &STATUSES[rng.random_range(0..STATUSES.len())];
    build_cross_query("HTTP status", status, rng)
}

fn validate() -> CoreResult<()> {
    check_table(STATUSES)
}

fn describe() -> Vec<Field> {
    describe_table(STATUSES)
}

const GENERATORS: &[Generator] = &[cross];

/// HTTP status codes.
pub const QUIZ: Quiz = Quiz {
    name: "http",
    description: "HTTP status codes and their reason phrases",
    generators: GENERATORS,
    validate,
    describe,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn classes() {
        assert_eq!(status(101, "").class(), "informational");
        assert_eq!(status(204, "").class(), "success");
        assert_eq!(status(308, "").class(), "redirection");
        assert_eq!(status(418, "").class(), "client error");
        assert_eq!(status(503, "").class(), "server error");
    }

    #[test]
    fn codes_are_unique_and_sorted() {
        for pair in STATUSES.windows(2) {
            assert!(pair[0].code < pair[1].code);
        }
    }

    #[test]
    fn not_found_in_both_directions() {
        let not_found = STATUSES.iter().find(|s| s.code == 404).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut by_code = false;
        let mut by_message = false;
        for _ in 0..500 {
            let q = build_cross_query("HTTP status", not_found, &mut rng);
            match q.prompt() {
                "What is the message of the HTTP status with code of 404?" => {
                    assert_eq!(q.answer(), "Not Found");
                    by_code = true;
                }
                "What is the code of the HTTP status with message of Not Found?" => {
                    assert_eq!(q.answer(), "404");
                    by_message = true;
                }
                _ => {}
            }
        }
        assert!(by_code && by_message);
    }
}
