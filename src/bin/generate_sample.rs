use chrono::{Days, NaiveDate};
use serde_json::json;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let first_names = [
        "Ahmed", "Aya", "Mina", "Sarah", "Mohamed", "Omar", "Laila", "Youssef", "Nour", "Hana",
        "Karim", "Dina",
    ];
    let last_names = [
        "Ali", "Elsayed", "Adel", "Reda", "Sayed", "Hassan", "Mostafa", "Farouk",
    ];

    let start = NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid start date");

    // Customers: one per first name, random surname.
    let customers: Vec<(u32, String)> = first_names
        .iter()
        .enumerate()
        .map(|(i, first)| {
            let last = rng.pick(&last_names);
            (i as u32 + 1, format!("{first} {last}"))
        })
        .collect();

    // Transactions: 4–12 per customer, random 2022 dates, amounts in 25-unit
    // steps so printed values stay round like the built-in seed.
    let mut transactions: Vec<(u32, u32, NaiveDate, f64)> = Vec::new();
    let mut tx_id: u32 = 0;
    for &(customer_id, _) in &customers {
        let count = 4 + rng.next_u64() % 9;
        for _ in 0..count {
            tx_id += 1;
            let date = start + Days::new(rng.next_u64() % 365);
            let amount = 25.0 * (2 + rng.next_u64() % 238) as f64;
            transactions.push((tx_id, customer_id, date, amount));
        }
    }

    write_json("sample_data.json", &customers, &transactions);
    write_csv("sample_data.csv", &customers, &transactions);

    println!(
        "Wrote {} customers and {} transactions to sample_data.json / sample_data.csv",
        customers.len(),
        transactions.len()
    );
}

fn write_json(path: &str, customers: &[(u32, String)], transactions: &[(u32, u32, NaiveDate, f64)]) {
    let root = json!({
        "customers": customers
            .iter()
            .map(|(id, name)| json!({ "id": id, "name": name }))
            .collect::<Vec<_>>(),
        "transactions": transactions
            .iter()
            .map(|(id, customer_id, date, amount)| json!({
                "id": id,
                "customer_id": customer_id,
                "date": date.format("%Y-%m-%d").to_string(),
                "amount": amount,
            }))
            .collect::<Vec<_>>(),
    });

    let text = serde_json::to_string_pretty(&root).expect("serializing JSON");
    std::fs::write(path, text).expect("writing JSON file");
}

fn write_csv(path: &str, customers: &[(u32, String)], transactions: &[(u32, u32, NaiveDate, f64)]) {
    let mut writer = csv::Writer::from_path(path).expect("creating CSV file");
    writer
        .write_record(["id", "customer_id", "customer_name", "date", "amount"])
        .expect("writing CSV header");

    for (id, customer_id, date, amount) in transactions {
        let name = customers
            .iter()
            .find(|(cid, _)| cid == customer_id)
            .map(|(_, name)| name.as_str())
            .expect("transaction references a generated customer");
        writer
            .write_record([
                id.to_string(),
                customer_id.to_string(),
                name.to_string(),
                date.format("%Y-%m-%d").to_string(),
                format!("{amount}"),
            ])
            .expect("writing CSV row");
    }

    writer.flush().expect("flushing CSV file");
}
