pub mod filter;
pub mod movie;
pub mod search;

// url prefix for every api message
//
// the server mounts its routes under this prefix and the webapp posts to it,
// so the two must agree at compile time
pub const API_PREFIX: &str = "/moviesearch/api";

pub fn message_path(name: &str) -> String {
    format!("{API_PREFIX}/{name}")
}

// message!
//
// each api message is a FooReq/FooResp pair of structs; this macro generates
// the matching client function foo(&FooReq) -> anyhow::Result<FooResp> that
// posts the request as json and decodes the response
//
// non-2xx responses carry the error text in the body, which is surfaced as the
// anyhow message so that the ui can show it verbatim
#[macro_export]
macro_rules! message {
    ($name:ident) => {
        paste::paste! {
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let resp = gloo_net::http::Request::post($crate::message_path(stringify!([<$name:camel>])).as_str())
                    .json(req)?
                    .send()
                    .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    Err(anyhow::Error::msg(resp.text().await?))
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_paths_live_under_the_prefix() {
        assert_eq!(message_path("GetGenres"), "/moviesearch/api/GetGenres");
        assert_eq!(message_path("SearchMovies"), "/moviesearch/api/SearchMovies");
    }
}
