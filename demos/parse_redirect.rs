/// Reading parameters off an authorization redirect URL
use qsplice::QueryComponent;

fn main() {
    let redirect =
        "https://client.example/cb?code=4%2F0AX4XfWh&state=af0ifjsldkj&scope=openid+profile"
            .to_string();

    let query = QueryComponent::from_url(&redirect).expect("Failed to parse query");

    println!("code: {:?}", query.get("code")); // Some("4/0AX4XfWh")
    println!("state: {:?}", query.get("state")); // Some("af0ifjsldkj")
    println!("scope: {:?}", query.get("scope")); // Some("openid profile")
    println!();

    // Every entry, in the order the URL carried them
    println!("All parameters:");
    for (name, value) in query.iter() {
        println!("  {name} = {value}");
    }
}
