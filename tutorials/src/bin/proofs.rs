use nary_merkle_tree::{TreeOptions, VerifyOptions, is_proven, new_tree, prove};

const BLOCKS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

fn main() {
    // Show the library's debug events. Override with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nary_merkle_tree=debug")),
        )
        .init();

    // Build a binary SHA-256 tree over the blocks.
    let tree = new_tree(BLOCKS, TreeOptions::default()).unwrap();
    println!("root hash: {}", tree.root_hash());
    println!("height: {}", tree.height());

    // Generate a proof for block "f" and print it, leaf-first.
    let index = 5;
    let proof = prove(&tree, index).unwrap();
    for (level, sibling) in proof.iter().enumerate() {
        println!("level {}: {}", level, sibling);
    }

    // Anyone who knows only the root hash can now check the block.
    println!("Does block \"f\" belong at index 5 under the root hash?");
    if is_proven(BLOCKS[index], index, tree.root_hash(), &proof, VerifyOptions::default()) {
        println!("Yes");
    } else {
        println!("No");
    }

    // A different block with the same proof does not verify.
    println!("Does block \"x\" belong at index 5 under the root hash?");
    if is_proven("x", index, tree.root_hash(), &proof, VerifyOptions::default()) {
        println!("Yes");
    } else {
        println!("No");
    }
}
