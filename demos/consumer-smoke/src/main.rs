//! Walk-through of the witness pattern over the published surface.
//!
//! Runs the whole story top to bottom for its printed output: two
//! describe styles for one type, redaction as a pullback, a
//! multi-operation discount table, and canned download/persistence
//! witnesses behind a partial adapter. No interface conformance anywhere:
//! every behavior is a value handed to a consumer next to its payload.

use captable::{impl_pullback, Adapter, Pullback, Witness};

#[derive(Debug, Clone)]
struct Person {
    name: String,
    surname: String,
    id: u32,
}

mod describing {
    use super::Person;
    use captable::Witness;

    pub fn short() -> Witness<Person, String> {
        Witness::new(|p: &Person| format!("{} {}", p.name, p.surname))
    }

    pub fn pretty() -> Witness<Person, String> {
        Witness::new(|p: &Person| {
            format!("{} {} (id: {})", p.name, p.surname, p.id)
        })
    }
}

/// Generic consumer: the payload and the table arrive as independent
/// parameters, and printing stays out here, never inside a witness.
fn print_described<A>(value: &A, describe: &Witness<A, String>) {
    println!("  {}", describe.apply(value));
}

#[derive(Debug, Clone)]
struct Purchase {
    subtotal_cents: i64,
}

struct Discounting<A> {
    percent_off: Witness<A, u8>,
    total_cents: Witness<A, i64>,
}

impl_pullback!(Discounting { percent_off, total_cents });

#[derive(Debug, Clone)]
struct Endpoint {
    host: String,
    path: String,
}

fn parse_endpoint(raw: &str) -> Option<Endpoint> {
    let rest = raw.strip_prefix("https://")?;
    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
    if host.is_empty() {
        return None;
    }
    Some(Endpoint {
        host: host.to_string(),
        path: path.to_string(),
    })
}

fn main() {
    let blob = Person {
        name: "Blob".to_string(),
        surname: "McBlob".to_string(),
        id: 8_675_309,
    };

    println!("two styles, one consumer:");
    print_described(&blob, &describing::short());
    print_described(&blob, &describing::pretty());

    println!("redaction is a pullback:");
    let redacted = describing::pretty().pullback(|p: &Person| Person {
        id: 0,
        ..p.clone()
    });
    print_described(&blob, &redacted);

    println!("multi-operation table, pulled back field by field:");
    let seasonal = Discounting {
        percent_off: Witness::constant(10),
        total_cents: Witness::new(|p: &Purchase| p.subtotal_cents * 90 / 100),
    };
    let for_raw_cents = seasonal.pullback_with(&Adapter::new(|cents: &i64| Purchase {
        subtotal_cents: *cents,
    }));
    println!(
        "  {}% off 2000c -> {}c",
        for_raw_cents.percent_off.apply(&2000),
        for_raw_cents.total_cents.apply(&2000)
    );

    println!("canned download witness behind a partial adapter:");
    let fetch: Witness<Endpoint, Vec<u8>> =
        Witness::new(|e: &Endpoint| format!("<{} bytes from {}>", e.path.len(), e.host).into_bytes());
    let fetch_raw = fetch.pullback_opt(|raw: &String| parse_endpoint(raw));

    for raw in ["https://example.com/episodes.json", "not a url"] {
        match fetch_raw.apply(&raw.to_string()) {
            Ok(bytes) => println!("  {raw} -> {}", String::from_utf8_lossy(&bytes)),
            Err(err) => println!("  {raw} -> error: {err}"),
        }
    }
}
