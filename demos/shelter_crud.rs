// region:    --- Modules

use std::time::Instant;

use shelter_db::mongo::{doc, Client, ConnectionParams};
use uuid::Uuid;

// endregion: --- Modules

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -- INIT CLIENT

    let params = ConnectionParams {
        collection: "animals_demo".into(),
        ..Default::default()
    };

    let client = Client::connect(&params).await?;
    client.drop_collection().await?;

    // -- SEED COLLECTION
    let case_id = seed_animals(&client).await?;

    // -- READ ANIMALS
    let start = Instant::now();
    let dogs = client.find(doc! { "animal_type": "Dog" }).await?;
    println!("Find {} dogs: {:?}", dogs.len(), start.elapsed());

    // -- UPDATE ANIMAL
    let start = Instant::now();
    let modified = client
        .update_one(
            doc! { "case_id": &case_id },
            doc! { "$set": { "outcome_type": "Adoption" } },
        )
        .await?;
    println!("Update one ({modified} modified): {:?}", start.elapsed());

    // Check
    let adopted = client
        .find_one(doc! { "case_id": &case_id })
        .await?
        .expect("seeded animal should be present");
    assert_eq!("Adoption", adopted.get_str("outcome_type")?);

    // -- DELETE ANIMAL
    let start = Instant::now();
    let deleted = client.delete_one(doc! { "case_id": &case_id }).await?;
    println!("Delete one ({deleted} deleted): {:?}", start.elapsed());

    // -- COUNT REMAINING
    let remaining = client.count(None).await?;
    println!("Animals remaining: {remaining}");

    client.drop_collection().await?;

    Ok(())
}

async fn seed_animals(client: &Client) -> anyhow::Result<String> {
    const ITEMS_COUNT: usize = 1_000;

    let mut animals = Vec::new();

    // Animal with a known case id
    let case_id = Uuid::new_v4().to_string();
    animals.push(doc! {
        "case_id": &case_id,
        "animal_type": "Dog",
        "breed": "Labrador Retriever Mix",
        "outcome_type": "Transfer",
    });

    // Bulk animals
    for i in 0..ITEMS_COUNT {
        animals.push(doc! {
            "case_id": Uuid::new_v4().to_string(),
            "animal_type": if i % 3 == 0 { "Cat" } else { "Dog" },
            "breed": format!("Breed {i}"),
            "outcome_type": "Transfer",
        });
    }

    let start = Instant::now();
    let inserted = client.create_many(animals).await?;
    println!("Insert {} animals: {:?}", inserted, start.elapsed());

    Ok(case_id)
}
