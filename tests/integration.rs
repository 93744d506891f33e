// Integration tests (native) for the `coin-chase` crate.
// These drive the public `Game` API the way the browser frame loop and key
// handler do, without touching wasm/browser APIs.

use coin_chase::{Game, GameConfig, GameEvent, Phase, Position};

#[test]
fn start_then_arrow_keys_move_player() {
    let mut game = Game::with_seed(GameConfig::default(), 2024).unwrap();
    game.start();
    assert!(game.board().is_clear());
    let start = game.player().position;
    assert_eq!(start, Position::new(GameConfig::default().board_width / 2, 0));

    for _ in 0..5 {
        assert!(game.handle_key("ArrowRight"));
    }
    for _ in 0..3 {
        assert!(game.handle_key("ArrowDown"));
    }
    assert!(!game.handle_key("Enter"));
    assert_eq!(game.player().position, Position::new(start.x + 5, start.y + 3));
}

#[test]
fn idle_player_is_caught_exactly_once() {
    let mut game = Game::with_seed(GameConfig::default(), 7).unwrap();
    game.start();
    // player (15, 0), enemy (20, 20): 5 + 20 unit steps apart
    let mut moves = 0;
    let mut game_overs = 0;
    let mut now = 0.0;
    for _ in 0..200 {
        for event in game.step(now) {
            match event {
                GameEvent::EnemyMoved(_) => moves += 1,
                GameEvent::GameOver { score } => {
                    assert_eq!(score, 0);
                    game_overs += 1;
                }
                GameEvent::CoinCollected { .. } => panic!("player never touched the coin"),
            }
        }
        now += 301.0;
    }
    assert_eq!(moves, 25);
    assert_eq!(game_overs, 1);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.enemy().position, game.player().position);
}

#[test]
fn walking_onto_the_coin_scores() {
    // enemy parked in a corner column the walk below never enters
    let config = GameConfig { enemy_start: (0, 29), ..GameConfig::default() };
    let mut game = Game::with_seed(config, 99).unwrap();
    game.start();
    let target = game.coin().position;

    // walk horizontally, then vertically, checking collisions after each key
    // like the frame loop would
    let mut collected = Vec::new();
    while game.player().position != target {
        let p = game.player().position;
        let key = if p.x < target.x {
            "ArrowRight"
        } else if p.x > target.x {
            "ArrowLeft"
        } else {
            "ArrowDown"
        };
        game.handle_key(key);
        collected.extend(game.step(0.0).into_iter().filter_map(|e| match e {
            GameEvent::CoinCollected { score, refresh_ms, coin } => Some((score, refresh_ms, coin)),
            _ => None,
        }));
    }
    // a tick never fires at a constant timestamp, so the enemy stayed put
    assert_eq!(game.enemy().position, Position::new(0, 29));
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(collected.len(), 1);
    let (score, refresh_ms, coin) = collected[0];
    assert_eq!(score, 10);
    assert_eq!(refresh_ms, 250.0);
    assert!((1..29).contains(&coin.x) && (1..29).contains(&coin.y));
    assert_eq!(game.score(), 10);
}
