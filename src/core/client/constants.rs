//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// CodeChef profile base (handle is appended).
pub(crate) const DEFAULT_BASE_CODECHEF: &str = "https://www.codechef.com/users/";

/// Codeforces REST API base (`user.info` / `user.status` are appended).
pub(crate) const DEFAULT_BASE_CODEFORCES_API: &str = "https://codeforces.com/api/";

/// SPOJ profile base (handle is appended with a trailing slash).
pub(crate) const DEFAULT_BASE_SPOJ: &str = "https://www.spoj.com/users/";

/// GeeksForGeeks profile base (handle is appended).
pub(crate) const DEFAULT_BASE_GEEKSFORGEEKS: &str = "https://auth.geeksforgeeks.org/user/";

/// InterviewBit profile base (handle is appended).
pub(crate) const DEFAULT_BASE_INTERVIEWBIT: &str = "https://www.interviewbit.com/profile/";

/// LeetCode site base (handle is appended for the existence probe).
pub(crate) const DEFAULT_BASE_LEETCODE: &str = "https://leetcode.com/";

/// LeetCode GraphQL endpoint.
pub(crate) const DEFAULT_LEETCODE_GRAPHQL: &str = "https://leetcode.com/graphql";
