/// Building an authorization request URL
use qsplice::QueryComponent;

fn main() {
    let mut query = QueryComponent::new();
    query.append("response_type", "code");
    query.append("client_id", "s6BhdRkqt3");
    query.append("redirect_uri", "https://client.example/cb");
    query.append("scope", "openid profile");
    query.append("state", "af0ifjsldkj");

    // Reserved characters in values are hidden from the URL structure
    println!("query: {}", query.encode());
    // response_type=code&client_id=s6BhdRkqt3&redirect_uri=https%3A%2F%2Fclient.example%2Fcb&scope=openid%20profile&state=af0ifjsldkj

    let endpoint = "https://idp.example/authorize".to_string();
    let url = query.splice_into_url(&endpoint);

    println!("url: {url}");
    // https://idp.example/authorize?response_type=code&client_id=s6BhdRkqt3&redirect_uri=https%3A%2F%2Fclient.example%2Fcb&scope=openid%20profile&state=af0ifjsldkj
}
