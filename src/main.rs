use log::info;
use randomized_bst::treap::TreapSet;

fn main() {
    let env = env_logger::Env::new()
        .filter("TREAP_LOG")
        .write_style("TREAP_LOG_STYLE");
    env_logger::init_from_env(env);

    let mut treap = TreapSet::new();
    for value in 1..=6 {
        treap.insert(value);
    }
    info!("Built a treap of {} values with height {}.", treap.len(), treap.height());

    println!("{:#?}", treap);
    println!("------------------");
    println!("in-order:    {:?}", treap.iter().collect::<Vec<_>>());
    println!("level-order: {:?}", treap.level_order());
    println!("valid:       {}", treap.is_valid());
}
