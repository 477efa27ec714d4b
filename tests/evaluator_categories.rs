use casino_holdem_ev::cards::{parse_cards, Card};
use casino_holdem_ev::deck::Deck;
use casino_holdem_ev::evaluator::{evaluate_five, Category};

fn five(text: &str) -> [Card; 5] {
    let v = parse_cards(text).unwrap();
    [v[0], v[1], v[2], v[3], v[4]]
}

#[test]
fn category_royal_flush() {
    let e = evaluate_five(&five("As Ks Qs Js Ts"));
    assert_eq!(e.category, Category::RoyalFlush);
}

#[test]
fn category_straight_flush() {
    let e = evaluate_five(&five("9d 8d 7d 6d 5d"));
    assert_eq!(e.category, Category::StraightFlush);
}

#[test]
fn category_four_of_a_kind() {
    let e = evaluate_five(&five("9c 9d 9h 9s Ac"));
    assert_eq!(e.category, Category::FourOfAKind);
}

#[test]
fn category_full_house() {
    let e = evaluate_five(&five("3c 3d 3h Js Jc"));
    assert_eq!(e.category, Category::FullHouse);
}

#[test]
fn category_straight_wheel() {
    let e = evaluate_five(&five("Ac 5c 4d 3h 2s"));
    assert_eq!(e.category, Category::Straight);
}

#[test]
fn category_two_pair_and_pair() {
    assert_eq!(evaluate_five(&five("Jc Jd 9c 9h 2s")).category, Category::TwoPair);
    assert_eq!(evaluate_five(&five("Ah Ad Ts 9c 2d")).category, Category::Pair);
    assert_eq!(evaluate_five(&five("Ah Kd 7s 5c 2d")).category, Category::HighCard);
}

#[test]
fn exhaustive_five_card_census() {
    let deck = Deck::standard();
    let cards = deck.cards();
    let mut counts = [0u32; 10];
    for a in 0..cards.len() {
        for b in (a + 1)..cards.len() {
            for c in (b + 1)..cards.len() {
                for d in (c + 1)..cards.len() {
                    for e in (d + 1)..cards.len() {
                        let hand = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        counts[evaluate_five(&hand).category.ordinal() as usize] += 1;
                    }
                }
            }
        }
    }

    let expected = [
        (Category::RoyalFlush, 4),
        (Category::StraightFlush, 36),
        (Category::FourOfAKind, 624),
        (Category::FullHouse, 3_744),
        (Category::Flush, 5_108),
        (Category::Straight, 10_200),
        (Category::ThreeOfAKind, 54_912),
        (Category::TwoPair, 123_552),
        (Category::Pair, 1_098_240),
        (Category::HighCard, 1_302_540),
    ];
    for (category, n) in expected {
        assert_eq!(counts[category.ordinal() as usize], n, "{category}");
    }
    assert_eq!(counts.iter().sum::<u32>(), 2_598_960);
}
