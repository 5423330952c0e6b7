use matula_ion::algebra::{prime_tower, Tree};
use matula_ion::config::MatulaConfig;
use matula_ion::matula::{decode, encode};
use matula_ion::primes::{is_prime, prime_factorization, PrimeOracle};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_round_trip(n in 1u64..200_000) {
        let mut oracle = PrimeOracle::new();
        let tree = encode(n, &mut oracle);
        prop_assert_eq!(decode(&tree, &mut oracle).unwrap(), n);
    }

    #[test]
    fn prop_factorization_multiplies_back(n in 2u64..10_000_000) {
        let factors = prime_factorization(n);
        prop_assert_eq!(factors.iter().product::<u64>(), n);
        prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(factors.iter().all(|&p| is_prime(p)));
    }

    #[test]
    fn prop_product_of_encodings(a in 1u64..500, b in 1u64..500) {
        // grafting b's subtrees under a's root multiplies the numbers
        let mut oracle = PrimeOracle::new();
        let ta = encode(a, &mut oracle);
        let tb = encode(b, &mut oracle);
        let merged = format!("{}{})", &ta[..ta.len() - 1], &tb[1..tb.len() - 1]);
        prop_assert_eq!(decode(&merged, &mut oracle).unwrap(), a * b);
    }

    #[test]
    fn prop_graft_is_nth_prime(n in 1u64..2_000) {
        let mut oracle = PrimeOracle::new();
        let grafted = Tree::from_matula(n, &mut oracle).graft_root();
        prop_assert_eq!(
            grafted.matula_number(&mut oracle).unwrap(),
            oracle.nth_prime(n).unwrap()
        );
    }

    #[test]
    fn prop_tower_law(seed in 1u64..300, depth in 0usize..3) {
        let mut oracle = PrimeOracle::new();
        let tower = prime_tower(seed, depth, &mut oracle).unwrap();
        prop_assert_eq!(tower.len(), depth + 1);
        prop_assert_eq!(tower[0], seed);
        for w in tower.windows(2) {
            prop_assert_eq!(w[1], oracle.nth_prime(w[0]).unwrap());
            prop_assert_eq!(oracle.prime_to_index(w[1]), w[0]);
        }
    }

    #[test]
    fn prop_reordered_children_decode_equal(n in 1u64..5_000) {
        let mut oracle = PrimeOracle::new();
        let tree = Tree::from_matula(n, &mut oracle);
        let mut parts: Vec<String> = tree
            .children(0)
            .iter()
            .map(|&c| subtree(&tree, c))
            .collect();
        parts.reverse();
        let reordered = format!("({})", parts.concat());
        prop_assert_eq!(decode(&reordered, &mut oracle).unwrap(), n);
    }

    #[test]
    fn prop_config_round_trip(depth in 1usize..1_000, cap in proptest::option::of(1u64..1_000_000)) {
        let config = MatulaConfig { max_tree_depth: depth, max_prime_index: cap };
        let json = config.to_json().unwrap();
        prop_assert_eq!(MatulaConfig::from_json(&json).unwrap(), config);
    }
}

fn subtree(tree: &Tree, node: usize) -> String {
    let mut out = String::from("(");
    for &c in tree.children(node) {
        out.push_str(&subtree(tree, c));
    }
    out.push(')');
    out
}
