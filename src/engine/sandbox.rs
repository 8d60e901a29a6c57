//! A tiny stand-in engine that speaks the stepping protocol.
//!
//! Rules are deliberately trivial: cards are plain chip values, a hand scores
//! `sum × count`, and a blind is beaten by reaching its target before running
//! out of hands. It exists so the environment, agents and benchmarks have
//! something deterministic to drive. Like the real engine it chatters on
//! stdout, which is what the quiet switch is for.
use super::*;
use crate::Index;
use crate::Money;
use crate::Score;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const HAND_SIZE: usize = 8;
const MAX_SELECTED: usize = 5;
const BASE_TARGET: Score = 300;
const REROLL_COST: Money = 5;
const PACK_COST: Money = 4;

const PLAY: Index = 0;
const DISCARD: Index = 1;
const TOGGLE: Index = 2;
const SELECT: Index = 1;
const SKIP: Index = 2;
const CASH_OUT: Index = 0;
const NEXT_ROUND: Index = 0;
const REROLL: Index = 1;
const OPEN_PACK: Index = 2;
const AGAIN: Index = 1;
const EXIT: Index = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Blind {
    Small,
    Big,
    Boss,
}

impl Blind {
    fn multiplier(&self) -> Score {
        match self {
            Self::Small => 2,
            Self::Big => 3,
            Self::Boss => 4,
        }
    }
    fn payout(&self) -> Money {
        match self {
            Self::Small => 3,
            Self::Big => 4,
            Self::Boss => 5,
        }
    }
}

pub struct Sandbox {
    rng: SmallRng,
    deck: Deck,
    stake: Stake,
    phase: Phase,
    over: Option<Outcome>,
    blind: Blind,
    ante: u32,
    score: Score,
    money: Money,
    chips: Score,
    hands: u32,
    discards: u32,
    cards: Vec<Score>,
    selected: Vec<bool>,
}

impl Sandbox {
    fn reset_run(&mut self) {
        self.phase = Phase::BlindSelect;
        self.over = None;
        self.blind = Blind::Small;
        self.ante = 1;
        self.score = 0;
        self.chips = 0;
        self.money = match self.deck {
            Deck::Yellow => 14,
            _ => 4,
        };
    }
    fn target(&self) -> Score {
        let base = BASE_TARGET * self.ante as Score * self.blind.multiplier() / 2;
        base + base * self.stake as Score / 10
    }
    fn deal(&mut self) {
        self.cards = (0..HAND_SIZE).map(|_| self.rng.random_range(1..=11)).collect();
        self.selected = vec![false; HAND_SIZE];
    }
    fn redraw(&mut self) {
        for (card, picked) in self.cards.iter_mut().zip(self.selected.iter_mut()) {
            if *picked {
                *card = self.rng.random_range(1..=11);
                *picked = false;
            }
        }
    }
    fn picked(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    fn begin_blind(&mut self) {
        self.hands = match self.deck {
            Deck::Blue => 5,
            _ => 4,
        };
        self.discards = match self.deck {
            Deck::Red => 4,
            _ => 3,
        };
        self.chips = 0;
        self.deal();
        self.phase = Phase::Playing;
        println!("blind {:?} ante {} target {}", self.blind, self.ante, self.target());
    }
    fn next_blind(&mut self) {
        self.blind = match self.blind {
            Blind::Small => Blind::Big,
            Blind::Big => Blind::Boss,
            Blind::Boss => {
                self.ante += 1;
                Blind::Small
            }
        };
        self.phase = Phase::BlindSelect;
    }
    fn play(&mut self) {
        if self.picked() == 0 {
            self.selected[0] = true;
        }
        let played = self
            .cards
            .iter()
            .zip(self.selected.iter())
            .filter(|(_, s)| **s)
            .map(|(c, _)| *c)
            .collect::<Vec<Score>>();
        let gained = played.iter().sum::<Score>() * played.len() as Score;
        self.chips += gained;
        self.score += gained;
        self.hands -= 1;
        println!("played {:?} for {} ({}/{})", played, gained, self.chips, self.target());
        self.redraw();
        if self.chips >= self.target() {
            self.phase = Phase::RoundEnd;
        } else if self.hands == 0 {
            println!("out of hands");
            self.phase = Phase::GameOver;
        }
    }
    fn discard(&mut self) {
        if self.picked() > 0 {
            self.discards -= 1;
            self.redraw();
        }
    }
    fn toggle(&mut self, card: usize) {
        if self.selected[card] || self.picked() < MAX_SELECTED {
            self.selected[card] = !self.selected[card];
        }
    }

    fn legal(&self) -> Vec<Choice> {
        match self.phase {
            Phase::BlindSelect => match self.blind {
                Blind::Boss => vec![(SELECT, "Play next blind")],
                _ => vec![(SELECT, "Play next blind"), (SKIP, "Skip blind")],
            }
            .into_iter()
            .map(Choice::from)
            .collect(),
            Phase::Playing => {
                let mut actions = vec![Choice::from((PLAY, "Play selected"))];
                if self.discards > 0 {
                    actions.push(Choice::from((DISCARD, "Discard selected")));
                }
                for (i, picked) in self.selected.iter().enumerate() {
                    if *picked || self.picked() < MAX_SELECTED {
                        actions.push(Choice {
                            index: TOGGLE + i,
                            label: format!("Toggle card {} ({})", i, self.cards[i]),
                        });
                    }
                }
                actions
            }
            Phase::RoundEnd => vec![Choice::from((CASH_OUT, "Cash out"))],
            Phase::Shop => {
                let mut actions = vec![Choice::from((NEXT_ROUND, "Next round"))];
                if self.money >= REROLL_COST {
                    actions.push(Choice::from((REROLL, "Reroll")));
                }
                if self.money >= PACK_COST {
                    actions.push(Choice::from((OPEN_PACK, "Open booster pack")));
                }
                actions
            }
            Phase::ShopPackSelection => Vec::new(),
            Phase::GameOver => vec![(AGAIN, "Play again"), (EXIT, "Exit")]
                .into_iter()
                .map(Choice::from)
                .collect(),
        }
    }
    fn decision(&self) -> StepResult {
        match (self.over, self.phase) {
            (Some(outcome), phase) => StepResult::finished(Some(phase), outcome.restart),
            (None, Phase::ShopPackSelection) => StepResult::progressed(Some(self.phase)),
            (None, phase) => StepResult::input(phase, self.legal()),
        }
    }

    fn apply(&mut self, action: Index) {
        match (self.phase, action) {
            (Phase::BlindSelect, SELECT) => self.begin_blind(),
            (Phase::BlindSelect, SKIP) if self.blind != Blind::Boss => self.next_blind(),
            (Phase::Playing, PLAY) => self.play(),
            (Phase::Playing, DISCARD) if self.discards > 0 => self.discard(),
            (Phase::Playing, i) if (TOGGLE..TOGGLE + HAND_SIZE).contains(&i) => {
                self.toggle(i - TOGGLE)
            }
            (Phase::RoundEnd, CASH_OUT) => {
                let payout = self.blind.payout() + self.hands as Money;
                self.money += payout;
                println!("cashed out ${}", payout);
                self.phase = Phase::Shop;
            }
            (Phase::Shop, NEXT_ROUND) => self.next_blind(),
            (Phase::Shop, REROLL) if self.money >= REROLL_COST => self.money -= REROLL_COST,
            (Phase::Shop, OPEN_PACK) if self.money >= PACK_COST => {
                self.money -= PACK_COST;
                self.phase = Phase::ShopPackSelection;
            }
            (Phase::ShopPackSelection, _) => self.phase = Phase::Shop,
            (Phase::GameOver, AGAIN) => {
                self.over = Some(Outcome { restart: true });
            }
            (Phase::GameOver, EXIT) => {
                self.over = Some(Outcome { restart: false });
            }
            (phase, action) => println!("ignored action {} in {:?}", action, phase),
        }
    }
}

impl Engine for Sandbox {
    fn seeded(seed: u64) -> anyhow::Result<Self> {
        let mut sandbox = Self {
            rng: SmallRng::seed_from_u64(seed),
            deck: Deck::default(),
            stake: Stake::default(),
            phase: Phase::BlindSelect,
            over: None,
            blind: Blind::Small,
            ante: 1,
            score: 0,
            money: 0,
            chips: 0,
            hands: 0,
            discards: 0,
            cards: Vec::new(),
            selected: Vec::new(),
        };
        sandbox.reset_run();
        Ok(sandbox)
    }
    fn configure(&mut self, deck: Deck, stake: Stake) {
        self.deck = deck;
        self.stake = stake;
    }
    fn start(&mut self) -> anyhow::Result<()> {
        self.reset_run();
        println!("new run: {} deck, {} stake", self.deck, self.stake);
        Ok(())
    }
    fn step(&mut self, action: Option<Index>) -> anyhow::Result<StepResult> {
        if let Some(action) = action {
            if self.over.is_none() {
                self.apply(action);
            }
        }
        Ok(self.decision())
    }
    fn snapshot(&self) -> anyhow::Result<Snapshot> {
        Ok(Snapshot::from((self.score, self.money)))
    }
}
