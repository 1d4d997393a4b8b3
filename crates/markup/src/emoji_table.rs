//! Built-in emoji table.
//!
//! Names follow the common shortcode vocabulary (`:smile:`, `:+1:`, ...).
//! Every name, alias and keyword is lowercase, and no name or alias is shared
//! between two entries.

use crate::lexicon::{EmojiCategory, EmojiEntry};

use EmojiCategory::{Activities, Animals, Flags, Food, Objects, People, Smileys, Symbols, Travel};

const fn entry(
    glyph: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    category: EmojiCategory,
    keywords: &'static [&'static str],
) -> EmojiEntry {
    EmojiEntry {
        glyph,
        name,
        aliases,
        category,
        keywords,
    }
}

pub(crate) static EMOJI_TABLE: &[EmojiEntry] = &[
    // Smileys
    entry("😀", "grinning", &["grinning_face"], Smileys, &["happy", "smile", "joy"]),
    entry("😃", "smiley", &["smiley_face"], Smileys, &["happy", "joy", "haha", "open mouth"]),
    entry("😄", "smile", &["smile_face"], Smileys, &["happy", "joy", "laugh", "pleased"]),
    entry("😁", "grin", &["beaming"], Smileys, &["happy", "smile", "teeth"]),
    entry("😆", "laughing", &["satisfied"], Smileys, &["happy", "haha", "lol"]),
    entry("😅", "sweat_smile", &[], Smileys, &["hot", "relief", "nervous"]),
    entry("🤣", "rofl", &["rolling_on_the_floor_laughing"], Smileys, &["lol", "haha", "funny"]),
    entry("😂", "joy", &["tears_of_joy"], Smileys, &["laugh", "lol", "cry", "funny"]),
    entry("🙂", "slightly_smiling_face", &["slight_smile"], Smileys, &["smile", "okay"]),
    entry("🙃", "upside_down_face", &["upside_down"], Smileys, &["silly", "sarcasm"]),
    entry("😉", "wink", &["winking_face"], Smileys, &["flirt", "joke"]),
    entry("😊", "blush", &[], Smileys, &["smile", "proud", "shy"]),
    entry("😇", "innocent", &["halo"], Smileys, &["angel", "saint"]),
    entry("🥰", "smiling_face_with_three_hearts", &["in_love"], Smileys, &["love", "crush", "adore"]),
    entry("😍", "heart_eyes", &[], Smileys, &["love", "crush", "smitten"]),
    entry("🤩", "star_struck", &["starstruck"], Smileys, &["amazed", "wow", "eyes"]),
    entry("😘", "kissing_heart", &["blowing_kiss"], Smileys, &["love", "kiss", "flirt"]),
    entry("😋", "yum", &["savoring_food"], Smileys, &["tasty", "delicious", "tongue"]),
    entry("😛", "stuck_out_tongue", &["tongue_out"], Smileys, &["playful", "silly"]),
    entry("😜", "stuck_out_tongue_winking_eye", &["zany"], Smileys, &["playful", "joke", "crazy"]),
    entry("🤪", "zany_face", &["goofy"], Smileys, &["crazy", "wild", "silly"]),
    entry("🤑", "money_mouth_face", &["money_mouth"], Smileys, &["rich", "dollar", "cash"]),
    entry("🤗", "hugs", &["hugging_face", "hug"], Smileys, &["embrace", "thanks"]),
    entry("🤭", "hand_over_mouth", &["giggle"], Smileys, &["oops", "whoops", "secret"]),
    entry("🤫", "shushing_face", &["shush"], Smileys, &["quiet", "secret", "silence"]),
    entry("🤔", "thinking", &["thinking_face", "hmm"], Smileys, &["ponder", "wonder", "question"]),
    entry("🤐", "zipper_mouth_face", &["zipper_mouth"], Smileys, &["secret", "quiet", "sealed"]),
    entry("🤨", "raised_eyebrow", &["skeptic"], Smileys, &["suspicious", "doubt"]),
    entry("😐", "neutral_face", &["neutral"], Smileys, &["meh", "blank"]),
    entry("😑", "expressionless", &[], Smileys, &["blank", "unimpressed"]),
    entry("😶", "no_mouth", &["speechless"], Smileys, &["mute", "silence"]),
    entry("😏", "smirk", &["smirking_face"], Smileys, &["smug", "sly"]),
    entry("😒", "unamused", &[], Smileys, &["meh", "annoyed", "bored"]),
    entry("🙄", "roll_eyes", &["eye_roll"], Smileys, &["annoyed", "whatever"]),
    entry("😬", "grimacing", &["grimace"], Smileys, &["awkward", "teeth", "yikes"]),
    entry("😌", "relieved", &[], Smileys, &["calm", "peace", "whew"]),
    entry("😔", "pensive", &[], Smileys, &["sad", "regret"]),
    entry("😪", "sleepy", &[], Smileys, &["tired", "rest"]),
    entry("😴", "sleeping", &["zzz_face"], Smileys, &["tired", "sleep", "night"]),
    entry("😷", "mask", &["face_with_medical_mask"], Smileys, &["sick", "ill", "doctor"]),
    entry("🤒", "face_with_thermometer", &["thermometer_face"], Smileys, &["sick", "fever"]),
    entry("🤢", "nauseated_face", &["nauseated"], Smileys, &["sick", "gross", "disgust"]),
    entry("🤮", "vomiting_face", &["vomiting", "puke"], Smileys, &["sick", "gross"]),
    entry("🥵", "hot_face", &["hot"], Smileys, &["heat", "sweat", "fever"]),
    entry("🥶", "cold_face", &["freezing"], Smileys, &["cold", "ice", "winter"]),
    entry("🤯", "exploding_head", &["mind_blown"], Smileys, &["shocked", "wow"]),
    entry("🥳", "partying_face", &["party_face"], Smileys, &["celebrate", "birthday", "party"]),
    entry("😎", "sunglasses", &["cool"], Smileys, &["chill", "summer"]),
    entry("🤓", "nerd_face", &["nerd"], Smileys, &["geek", "glasses", "smart"]),
    entry("🧐", "monocle_face", &["monocle"], Smileys, &["inspect", "fancy"]),
    entry("😕", "confused", &[], Smileys, &["puzzled", "unsure"]),
    entry("😟", "worried", &[], Smileys, &["nervous", "concern"]),
    entry("😮", "open_mouth", &["surprised"], Smileys, &["wow", "shock"]),
    entry("😲", "astonished", &[], Smileys, &["amazed", "shock", "gasp"]),
    entry("😳", "flushed", &[], Smileys, &["embarrassed", "blush"]),
    entry("🥺", "pleading_face", &["pleading"], Smileys, &["puppy eyes", "please", "beg"]),
    entry("😢", "cry", &["crying_face"], Smileys, &["sad", "tear"]),
    entry("😭", "sob", &["loudly_crying"], Smileys, &["sad", "cry", "tears"]),
    entry("😱", "scream", &[], Smileys, &["horror", "shocked", "fear"]),
    entry("😤", "triumph", &["huffing"], Smileys, &["proud", "angry", "steam"]),
    entry("😡", "rage", &["pout"], Smileys, &["angry", "mad", "furious"]),
    entry("😠", "angry", &["angry_face"], Smileys, &["mad", "annoyed"]),
    entry("🤬", "cursing_face", &["swearing"], Smileys, &["angry", "censored"]),
    entry("😈", "smiling_imp", &["devil"], Smileys, &["evil", "mischief"]),
    entry("💀", "skull", &["dead"], Smileys, &["death", "lmao", "spooky"]),
    entry("💩", "poop", &["hankey", "shit"], Smileys, &["crap", "dirt"]),
    entry("🤡", "clown_face", &["clown"], Smileys, &["circus", "silly"]),
    entry("👻", "ghost", &[], Smileys, &["halloween", "spooky", "boo"]),
    entry("👽", "alien", &[], Smileys, &["ufo", "space"]),
    entry("🤖", "robot", &["robot_face", "bot"], Smileys, &["machine", "ai"]),
    // People
    entry("👋", "wave", &["waving_hand"], People, &["hello", "hi", "goodbye"]),
    entry("✋", "raised_hand", &["hand"], People, &["stop", "high five"]),
    entry("👌", "ok_hand", &["ok"], People, &["fine", "perfect"]),
    entry("✌️", "v", &["victory_hand", "peace_sign"], People, &["peace", "victory"]),
    entry("🤞", "crossed_fingers", &["fingers_crossed"], People, &["luck", "hope"]),
    entry("🤘", "metal", &["sign_of_the_horns"], People, &["rock", "concert"]),
    entry("🤙", "call_me_hand", &["shaka"], People, &["call", "hang loose"]),
    entry("👈", "point_left", &[], People, &["direction", "left"]),
    entry("👉", "point_right", &[], People, &["direction", "right"]),
    entry("👆", "point_up_2", &["point_up"], People, &["direction", "up"]),
    entry("👇", "point_down", &[], People, &["direction", "down"]),
    entry("👍", "thumbsup", &["+1", "thumbs_up"], People, &["approve", "yes", "like", "good"]),
    entry("👎", "thumbsdown", &["-1", "thumbs_down"], People, &["disapprove", "no", "dislike", "bad"]),
    entry("✊", "fist", &["fist_raised"], People, &["power", "solidarity"]),
    entry("👊", "punch", &["facepunch", "fist_oncoming"], People, &["bump", "hit"]),
    entry("👏", "clap", &["clapping_hands"], People, &["applause", "bravo", "congrats"]),
    entry("🙌", "raised_hands", &["hooray"], People, &["celebrate", "praise", "yay"]),
    entry("👐", "open_hands", &[], People, &["hug", "jazz hands"]),
    entry("🤝", "handshake", &[], People, &["deal", "agreement", "meeting"]),
    entry("🙏", "pray", &["folded_hands"], People, &["please", "thanks", "hope"]),
    entry("💪", "muscle", &["flexed_biceps"], People, &["strong", "gym", "power"]),
    entry("👀", "eyes", &[], People, &["look", "watch", "see"]),
    entry("🧠", "brain", &[], People, &["smart", "mind", "think"]),
    entry("🤷", "shrug", &["person_shrugging"], People, &["idk", "whatever", "dunno"]),
    entry("🤦", "facepalm", &["person_facepalming"], People, &["disbelief", "ugh"]),
    entry("🙋", "raising_hand", &["person_raising_hand"], People, &["question", "me", "volunteer"]),
    entry("🙇", "bow", &["person_bowing"], People, &["respect", "sorry", "thanks"]),
    // Animals & nature
    entry("🐶", "dog", &["dog_face"], Animals, &["pet", "puppy"]),
    entry("🐱", "cat", &["cat_face"], Animals, &["pet", "kitten", "meow"]),
    entry("🐭", "mouse", &["mouse_face"], Animals, &["rodent"]),
    entry("🦊", "fox_face", &["fox"], Animals, &["clever", "sly"]),
    entry("🐻", "bear", &[], Animals, &["teddy", "nature"]),
    entry("🐼", "panda_face", &["panda"], Animals, &["bamboo", "cute"]),
    entry("🐸", "frog", &[], Animals, &["toad", "croak"]),
    entry("🐵", "monkey_face", &[], Animals, &["banana", "primate"]),
    entry("🙈", "see_no_evil", &[], Animals, &["monkey", "hide", "oops"]),
    entry("🐔", "chicken", &[], Animals, &["bird", "hen"]),
    entry("🐧", "penguin", &[], Animals, &["bird", "linux", "antarctica"]),
    entry("🦄", "unicorn", &["unicorn_face"], Animals, &["magic", "fantasy", "rainbow"]),
    entry("🐝", "bee", &["honeybee"], Animals, &["insect", "honey", "buzz"]),
    entry("🐛", "bug", &[], Animals, &["insect", "issue", "defect"]),
    entry("🦀", "crab", &["ferris"], Animals, &["rust", "crustacean", "beach"]),
    entry("🐍", "snake", &[], Animals, &["python", "reptile"]),
    entry("🐢", "turtle", &[], Animals, &["slow", "reptile"]),
    entry("🐙", "octopus", &[], Animals, &["ocean", "tentacles"]),
    entry("🌵", "cactus", &[], Animals, &["desert", "plant"]),
    entry("🌲", "evergreen_tree", &["tree"], Animals, &["forest", "nature", "pine"]),
    entry("🍀", "four_leaf_clover", &["clover"], Animals, &["luck", "irish"]),
    entry("🌸", "cherry_blossom", &["sakura"], Animals, &["flower", "spring"]),
    entry("🌹", "rose", &[], Animals, &["flower", "romance", "love"]),
    entry("🌻", "sunflower", &[], Animals, &["flower", "summer"]),
    // Food & drink
    entry("🍎", "apple", &["red_apple"], Food, &["fruit", "healthy"]),
    entry("🍌", "banana", &[], Food, &["fruit", "monkey"]),
    entry("🍓", "strawberry", &[], Food, &["fruit", "berry"]),
    entry("🍑", "peach", &[], Food, &["fruit"]),
    entry("🥑", "avocado", &[], Food, &["fruit", "guacamole"]),
    entry("🌶️", "hot_pepper", &["chili"], Food, &["spicy", "hot"]),
    entry("🍕", "pizza", &[], Food, &["cheese", "slice", "italian"]),
    entry("🍔", "hamburger", &["burger"], Food, &["fast food", "meat"]),
    entry("🍟", "fries", &["french_fries"], Food, &["fast food", "potato"]),
    entry("🌮", "taco", &[], Food, &["mexican"]),
    entry("🍣", "sushi", &[], Food, &["japanese", "fish", "rice"]),
    entry("🍜", "ramen", &["noodles"], Food, &["soup", "japanese"]),
    entry("🍿", "popcorn", &[], Food, &["movie", "snack", "drama"]),
    entry("🍩", "doughnut", &["donut"], Food, &["sweet", "dessert"]),
    entry("🍪", "cookie", &[], Food, &["sweet", "snack", "biscuit"]),
    entry("🎂", "birthday", &["birthday_cake"], Food, &["cake", "party", "celebrate"]),
    entry("🍰", "cake", &["shortcake"], Food, &["dessert", "sweet"]),
    entry("☕", "coffee", &["hot_beverage"], Food, &["cafe", "morning", "caffeine"]),
    entry("🍵", "tea", &["teacup"], Food, &["green", "drink"]),
    entry("🍺", "beer", &[], Food, &["drink", "bar", "cheers"]),
    entry("🍻", "beers", &["clinking_beer_mugs"], Food, &["drink", "cheers", "party"]),
    entry("🍷", "wine_glass", &["wine"], Food, &["drink", "red"]),
    // Activities
    entry("⚽", "soccer", &["football"], Activities, &["sport", "ball", "goal"]),
    entry("🏀", "basketball", &[], Activities, &["sport", "ball", "nba"]),
    entry("🎮", "video_game", &["gaming"], Activities, &["controller", "play", "console"]),
    entry("🎲", "game_die", &["dice"], Activities, &["random", "board game", "luck"]),
    entry("🎯", "dart", &["direct_hit", "bullseye"], Activities, &["target", "goal", "focus"]),
    entry("🏆", "trophy", &[], Activities, &["win", "award", "champion", "leaderboard"]),
    entry("🥇", "1st_place_medal", &["gold_medal"], Activities, &["first", "winner", "gold"]),
    entry("🥈", "2nd_place_medal", &["silver_medal"], Activities, &["second", "silver"]),
    entry("🥉", "3rd_place_medal", &["bronze_medal"], Activities, &["third", "bronze"]),
    entry("🏅", "medal_sports", &["sports_medal", "medal"], Activities, &["award", "achievement"]),
    entry("🎉", "tada", &["party_popper"], Activities, &["celebrate", "party", "hooray"]),
    entry("🎊", "confetti_ball", &["confetti"], Activities, &["celebrate", "party"]),
    entry("🎁", "gift", &["present"], Activities, &["birthday", "surprise"]),
    entry("🎵", "musical_note", &["note"], Activities, &["music", "song"]),
    entry("🎧", "headphones", &[], Activities, &["music", "listen", "podcast"]),
    entry("🎨", "art", &["palette"], Activities, &["paint", "design", "creative"]),
    // Travel & places
    entry("🚀", "rocket", &[], Travel, &["launch", "ship", "space", "fast"]),
    entry("✈️", "airplane", &["plane"], Travel, &["flight", "travel"]),
    entry("🚗", "car", &["red_car"], Travel, &["drive", "vehicle"]),
    entry("🚲", "bike", &["bicycle"], Travel, &["cycle", "ride"]),
    entry("🏠", "house", &["home"], Travel, &["building"]),
    entry("🌍", "earth_africa", &["globe", "world"], Travel, &["planet", "international"]),
    entry("🌙", "crescent_moon", &["moon"], Travel, &["night", "sleep"]),
    entry("☀️", "sunny", &["sun"], Travel, &["weather", "summer", "bright"]),
    entry("🌈", "rainbow", &[], Travel, &["pride", "weather", "colors"]),
    entry("⭐", "star", &[], Travel, &["favorite", "night"]),
    entry("🌟", "star2", &["glowing_star"], Travel, &["shine", "sparkle"]),
    entry("⚡", "zap", &["high_voltage", "lightning"], Travel, &["power", "fast", "electric"]),
    entry("🔥", "fire", &["flame", "lit"], Travel, &["hot", "burn", "trending"]),
    entry("❄️", "snowflake", &[], Travel, &["winter", "cold", "snow"]),
    entry("🌊", "ocean", &["water_wave", "wave_water"], Travel, &["sea", "surf"]),
    // Objects
    entry("💡", "bulb", &["light_bulb", "idea"], Objects, &["light", "tip"]),
    entry("💻", "computer", &["laptop"], Objects, &["code", "work", "tech"]),
    entry("📱", "iphone", &["mobile_phone", "phone"], Objects, &["call", "smartphone"]),
    entry("📷", "camera", &[], Objects, &["photo", "picture"]),
    entry("🔒", "lock", &["locked"], Objects, &["security", "private"]),
    entry("🔓", "unlock", &["unlocked"], Objects, &["security", "open"]),
    entry("🔑", "key", &[], Objects, &["password", "access"]),
    entry("🔨", "hammer", &[], Objects, &["tool", "build", "ban"]),
    entry("🛠️", "hammer_and_wrench", &["tools"], Objects, &["build", "fix", "settings"]),
    entry("⚙️", "gear", &["cog"], Objects, &["settings", "config"]),
    entry("🛡️", "shield", &[], Objects, &["security", "protect", "moderator"]),
    entry("📌", "pushpin", &["pin"], Objects, &["location", "pinned"]),
    entry("📎", "paperclip", &[], Objects, &["attachment", "office"]),
    entry("📝", "memo", &["pencil"], Objects, &["note", "write", "document"]),
    entry("📚", "books", &[], Objects, &["library", "read", "study"]),
    entry("📢", "loudspeaker", &["announcement"], Objects, &["broadcast", "news"]),
    entry("🔔", "bell", &[], Objects, &["notification", "alert"]),
    entry("🔕", "no_bell", &["muted"], Objects, &["silent", "mute"]),
    entry("📊", "bar_chart", &["chart"], Objects, &["stats", "analytics", "graph"]),
    entry("📈", "chart_with_upwards_trend", &["trending_up"], Objects, &["growth", "stats", "analytics"]),
    entry("💰", "moneybag", &["money_bag"], Objects, &["dollar", "rich", "cash"]),
    entry("💎", "gem", &["diamond"], Objects, &["jewel", "precious"]),
    entry("⏰", "alarm_clock", &["alarm"], Objects, &["time", "wake", "morning"]),
    entry("⌛", "hourglass", &[], Objects, &["time", "wait"]),
    // Symbols
    entry("❤️", "heart", &["red_heart"], Symbols, &["love", "like"]),
    entry("🧡", "orange_heart", &[], Symbols, &["love"]),
    entry("💛", "yellow_heart", &[], Symbols, &["love", "friendship"]),
    entry("💚", "green_heart", &[], Symbols, &["love", "nature"]),
    entry("💙", "blue_heart", &[], Symbols, &["love", "trust"]),
    entry("💜", "purple_heart", &[], Symbols, &["love"]),
    entry("🖤", "black_heart", &[], Symbols, &["dark", "love"]),
    entry("💔", "broken_heart", &[], Symbols, &["sad", "heartbreak"]),
    entry("💯", "100", &["hundred"], Symbols, &["perfect", "score", "keep it real"]),
    entry("✅", "white_check_mark", &["check_mark_button", "done"], Symbols, &["yes", "ok", "complete"]),
    entry("✔️", "heavy_check_mark", &["check"], Symbols, &["yes", "ok", "verified"]),
    entry("❌", "x", &["cross_mark"], Symbols, &["no", "wrong", "delete"]),
    entry("❓", "question", &["question_mark"], Symbols, &["help", "what"]),
    entry("❗", "exclamation", &["heavy_exclamation_mark"], Symbols, &["important", "warning"]),
    entry("⚠️", "warning", &[], Symbols, &["caution", "alert", "danger"]),
    entry("🚫", "no_entry_sign", &["prohibited", "forbidden"], Symbols, &["ban", "block", "deny"]),
    entry("⛔", "no_entry", &[], Symbols, &["stop", "blocked"]),
    entry("♻️", "recycle", &[], Symbols, &["environment", "reuse"]),
    entry("✨", "sparkles", &["sparkle"], Symbols, &["shiny", "new", "magic"]),
    entry("💥", "boom", &["collision"], Symbols, &["explode", "bang"]),
    entry("💬", "speech_balloon", &["speech"], Symbols, &["chat", "comment", "message"]),
    entry("💭", "thought_balloon", &["thought"], Symbols, &["think", "idea"]),
    entry("💤", "zzz", &[], Symbols, &["sleep", "tired", "bored"]),
    entry("🆕", "new", &[], Symbols, &["fresh", "update"]),
    entry("🆗", "ok_button", &["ok_sign"], Symbols, &["fine", "agree"]),
    entry("🔴", "red_circle", &[], Symbols, &["live", "record", "offline"]),
    entry("🟢", "green_circle", &[], Symbols, &["online", "go", "status"]),
    // Flags
    entry("🏁", "checkered_flag", &["finish"], Flags, &["race", "done", "end"]),
    entry("🚩", "triangular_flag_on_post", &["red_flag"], Flags, &["report", "warning", "moderation"]),
    entry("🏳️", "white_flag", &["surrender"], Flags, &["give up", "peace"]),
    entry("🏴", "black_flag", &["waving_black_flag"], Flags, &["pirate"]),
    entry("🏳️‍🌈", "rainbow_flag", &["pride_flag"], Flags, &["pride", "lgbt"]),
    entry("🏴‍☠️", "pirate_flag", &["jolly_roger"], Flags, &["pirate", "skull"]),
];
