use dotenv::dotenv;
use scryfetch::adapters::inbound::create_client;
use scryfetch::adapters::outbound::image_store::init_image_store;
use scryfetch::adapters::outbound::init_scryfall;
use scryfetch::domain::app::App;
use scryfetch::ports::inbound::client::Client;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let scryfall = match init_scryfall() {
        Ok(scryfall) => scryfall,
        Err(why) => {
            log::error!("{why}");
            return;
        }
    };

    let app = App::new(scryfall.clone(), scryfall, init_image_store());
    let mut client = create_client(app);
    client.run().await;
}
