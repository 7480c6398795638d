//! Built-in level catalog: ten themed levels per difficulty, five words each.

use super::{LevelDef, w};

pub(super) static EASY: &[LevelDef] = &[
    LevelDef {
        id: 1,
        title: "Farm Adventure",
        story: "Welcome to Farmer Joe's farm! Today, we're going to learn about different animals that live on the farm. Can you help Farmer Joe identify all his animal friends?",
        lesson: "Farm animals and their names",
        words: [
            w("cow", "This animal gives us milk", "https://images.unsplash.com/photo-1570042225831-d98fa7577f1e?w=300&h=300&fit=crop"),
            w("pig", "This animal likes to roll in mud", "https://images.unsplash.com/photo-1516467508483-a7212febe31a?w=300&h=300&fit=crop"),
            w("hen", "This bird lays eggs", "https://images.unsplash.com/photo-1612170153139-6f881ff067e0?w=300&h=300&fit=crop"),
            w("duck", "This bird can swim and quacks", "https://images.unsplash.com/photo-1556155092-490a1ba16284?w=300&h=300&fit=crop"),
            w("goat", "This animal has horns and a beard", "https://images.unsplash.com/photo-1533318087102-b3ad366ed041?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 2,
        title: "Colorful World",
        story: "Today we're exploring the rainbow with Artist Anna! She needs your help naming all the beautiful colors she's using in her painting.",
        lesson: "Colors and their spellings",
        words: [
            w("red", "The color of apples and fire trucks", "https://images.unsplash.com/photo-1580227974546-fbd48825d991?w=300&h=300&fit=crop"),
            w("blue", "The color of the sky and ocean", "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=300&h=300&fit=crop"),
            w("green", "The color of grass and leaves", "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?w=300&h=300&fit=crop"),
            w("yellow", "The color of the sun and bananas", "https://images.unsplash.com/photo-1557682250-f6086caa9f16?w=300&h=300&fit=crop"),
            w("purple", "The color of grapes and lavender", "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 3,
        title: "Fruit Basket",
        story: "Chef Carlos is making a delicious fruit salad! He needs your help to identify all the fruits he's using in his recipe.",
        lesson: "Fruits and their names",
        words: [
            w("apple", "A round red or green fruit with a stem", "https://images.unsplash.com/photo-1570913149827-d2ac84ab3f9a?w=300&h=300&fit=crop"),
            w("banana", "A long yellow curved fruit", "https://images.unsplash.com/photo-1571771894821-ce9b6c11b08e?w=300&h=300&fit=crop"),
            w("orange", "A round citrus fruit with the same name as its color", "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?w=300&h=300&fit=crop"),
            w("grape", "Small round fruits that grow in bunches", "https://images.unsplash.com/photo-1596363505729-4190a9506133?w=300&h=300&fit=crop"),
            w("mango", "A sweet tropical fruit with orange flesh", "https://images.unsplash.com/photo-1591073113125-e46713c829ed?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 4,
        title: "Family Time",
        story: "Join the Johnson family for a picnic in the park! Let's learn about different family members and their roles.",
        lesson: "Family members and relationships",
        words: [
            w("mom", "A female parent", "https://images.unsplash.com/photo-1543342384-1f1350e27861?w=300&h=300&fit=crop"),
            w("dad", "A male parent", "https://images.unsplash.com/photo-1509506489701-dfe23b067808?w=300&h=300&fit=crop"),
            w("baby", "The youngest member of a family", "https://images.unsplash.com/photo-1519689680058-324335c77eba?w=300&h=300&fit=crop"),
            w("aunt", "Your parent's sister", "https://images.unsplash.com/photo-1556911220-e15b29be8c8f?w=300&h=300&fit=crop"),
            w("uncle", "Your parent's brother", "https://images.unsplash.com/photo-1582307811683-75b18a39ab71?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 5,
        title: "School Days",
        story: "It's the first day of school! Teacher Tom needs help identifying all the items in the classroom. Can you help him?",
        lesson: "School items and supplies",
        words: [
            w("book", "Pages with information bound together", "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=300&h=300&fit=crop"),
            w("desk", "A table where students sit and work", "https://images.unsplash.com/photo-1580582932707-520aed937b7b?w=300&h=300&fit=crop"),
            w("pen", "A writing tool with ink", "https://images.unsplash.com/photo-1585336261022-680e295ce3fe?w=300&h=300&fit=crop"),
            w("ruler", "A tool used to measure and draw straight lines", "https://images.unsplash.com/photo-1519337265831-281ec6cc8514?w=300&h=300&fit=crop"),
            w("clock", "Shows the time on the wall", "https://images.unsplash.com/photo-1508057198894-247b23fe5ade?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 6,
        title: "Body Parts",
        story: "Doctor Diana is teaching about the human body today! Help her identify different parts of the body.",
        lesson: "Human body parts and their functions",
        words: [
            w("hand", "You use these to grab things", "https://images.unsplash.com/photo-1577344718665-3e7c0c1ecf6b?w=300&h=300&fit=crop"),
            w("foot", "You stand on these", "https://images.unsplash.com/photo-1508387027939-27cccde53673?w=300&h=300&fit=crop"),
            w("eye", "You see with these", "https://images.unsplash.com/photo-1559570278-eb8d71d06403?w=300&h=300&fit=crop"),
            w("ear", "You hear with these", "https://images.unsplash.com/photo-1589137880361-c4c33ad2738e?w=300&h=300&fit=crop"),
            w("nose", "You smell with this", "https://images.unsplash.com/photo-1581511164597-f4f83b5e1066?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 7,
        title: "Weather Watch",
        story: "Meteorologist Mike is forecasting the weather for the week! Help him identify different weather conditions.",
        lesson: "Weather types and conditions",
        words: [
            w("rain", "Water falling from clouds", "https://images.unsplash.com/photo-1534274988757-a28bf1a57c17?w=300&h=300&fit=crop"),
            w("snow", "Frozen water falling from the sky", "https://images.unsplash.com/photo-1551582045-6ec9c11d8697?w=300&h=300&fit=crop"),
            w("wind", "Moving air that you can feel but not see", "https://images.unsplash.com/photo-1527482797697-8795b05a13fe?w=300&h=300&fit=crop"),
            w("sun", "The bright star that gives us light and heat", "https://images.unsplash.com/photo-1522124624696-7ea32eb9592c?w=300&h=300&fit=crop"),
            w("cloud", "White or gray shapes in the sky", "https://images.unsplash.com/photo-1611928482473-7b27d24eab80?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 8,
        title: "Clothing Closet",
        story: "Fashion Designer Fiona is organizing her closet! Help her identify different clothing items for her new collection.",
        lesson: "Clothing items and accessories",
        words: [
            w("hat", "Worn on your head", "https://images.unsplash.com/photo-1572307480813-ceb0e59d8325?w=300&h=300&fit=crop"),
            w("sock", "Worn on your feet inside shoes", "https://images.unsplash.com/photo-1586350977771-b3b0abd50c82?w=300&h=300&fit=crop"),
            w("coat", "Keeps you warm in cold weather", "https://images.unsplash.com/photo-1544022613-e87ca75a784a?w=300&h=300&fit=crop"),
            w("shoe", "Protects your feet when walking", "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?w=300&h=300&fit=crop"),
            w("belt", "Worn around your waist to hold up pants", "https://images.unsplash.com/photo-1624222247344-550fb60583dc?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 9,
        title: "Number Fun",
        story: "Mathematician Max is counting everything in sight! Help him identify numbers and learn to spell them.",
        lesson: "Numbers and their spellings",
        words: [
            w("one", "The first number", "https://images.unsplash.com/photo-1616244013240-89e5bbe8240b?w=300&h=300&fit=crop"),
            w("two", "A pair has this many items", "https://images.unsplash.com/photo-1638867269318-2020af22bd51?w=300&h=300&fit=crop"),
            w("five", "The number of fingers on one hand", "https://images.unsplash.com/photo-1628260412297-a3377e45006f?w=300&h=300&fit=crop"),
            w("ten", "The number of fingers on both hands", "https://images.unsplash.com/photo-1649180556628-9ba704115795?w=300&h=300&fit=crop"),
            w("zero", "The number that means nothing or none", "https://images.unsplash.com/photo-1621778455241-e52d1c8a2b02?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 10,
        title: "Shape Sorter",
        story: "Architect Alice is designing a new building! Help her identify different shapes she's using in her blueprints.",
        lesson: "Geometric shapes and their properties",
        words: [
            w("circle", "A round shape with no corners", "https://images.unsplash.com/photo-1494059980473-813e73ee784b?w=300&h=300&fit=crop"),
            w("square", "A shape with four equal sides", "https://images.unsplash.com/photo-1577374994572-3c9308d461a6?w=300&h=300&fit=crop"),
            w("star", "A shape with points that twinkles in the night sky", "https://images.unsplash.com/photo-1518709268805-4e9042af9f23?w=300&h=300&fit=crop"),
            w("heart", "A shape that represents love", "https://images.unsplash.com/photo-1518709766631-a6a7f45921c3?w=300&h=300&fit=crop"),
            w("oval", "An elongated circle shape", "https://images.unsplash.com/photo-1562246229-37b3aca47e0c?w=300&h=300&fit=crop"),
        ],
    },
];

pub(super) static MEDIUM: &[LevelDef] = &[
    LevelDef {
        id: 1,
        title: "Ocean Explorers",
        story: "Dive deep into the ocean with Marine Biologist Maya! She's studying the amazing creatures that live under the sea and needs your help identifying them.",
        lesson: "Marine life and ocean vocabulary",
        words: [
            w("shark", "A large fish with sharp teeth", "https://images.unsplash.com/photo-1560275619-4cc5fa59d3ae?w=300&h=300&fit=crop"),
            w("whale", "The largest mammal in the ocean", "https://images.unsplash.com/photo-1568430462989-44163eb1752f?w=300&h=300&fit=crop"),
            w("coral", "Colorful structures where fish live", "https://images.unsplash.com/photo-1546026423-cc4642628d2b?w=300&h=300&fit=crop"),
            w("octopus", "Sea creature with eight arms", "https://images.unsplash.com/photo-1545671913-b89ac1b4ac10?w=300&h=300&fit=crop"),
            w("dolphin", "Intelligent marine mammal that jumps", "https://images.unsplash.com/photo-1607153333879-c174d265f1d2?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 2,
        title: "Space Adventure",
        story: "Blast off into space with Astronaut Alex! He's on a mission to explore our solar system and needs your help naming what he sees through his telescope.",
        lesson: "Space and astronomy vocabulary",
        words: [
            w("planet", "A large object that orbits a star", "https://images.unsplash.com/photo-1614732414444-096e5f1122d5?w=300&h=300&fit=crop"),
            w("comet", "Icy object with a tail in space", "https://images.unsplash.com/photo-1506318137071-a8e063b4bec0?w=300&h=300&fit=crop"),
            w("galaxy", "A huge collection of stars", "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?w=300&h=300&fit=crop"),
            w("rocket", "Vehicle that travels to space", "https://images.unsplash.com/photo-1516849841032-87cbac4d88f7?w=300&h=300&fit=crop"),
            w("meteor", "A space rock that enters Earth's atmosphere", "https://images.unsplash.com/photo-1534972195531-d756b9bfa9f2?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 3,
        title: "Jungle Safari",
        story: "Join Explorer Emma on a jungle safari! She's documenting wild animals and needs your help identifying the creatures she encounters.",
        lesson: "Jungle animals and habitats",
        words: [
            w("tiger", "A large striped wild cat", "https://images.unsplash.com/photo-1549480017-d76466a4b7e8?w=300&h=300&fit=crop"),
            w("monkey", "A climbing animal with a long tail", "https://images.unsplash.com/photo-1540573133985-87b6da6d54a9?w=300&h=300&fit=crop"),
            w("parrot", "A colorful bird that can mimic sounds", "https://images.unsplash.com/photo-1552728089-57bdde30beb3?w=300&h=300&fit=crop"),
            w("python", "A large non-venomous snake", "https://images.unsplash.com/photo-1531386151447-fd76ad50012f?w=300&h=300&fit=crop"),
            w("jaguar", "A spotted big cat from the Americas", "https://images.unsplash.com/photo-1551972873-b7e8754e8e26?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 4,
        title: "City Life",
        story: "Urban Planner Uma is designing a new city! Help her identify important buildings and features that make up a modern metropolis.",
        lesson: "City structures and urban vocabulary",
        words: [
            w("bridge", "Structure that spans over water or roads", "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?w=300&h=300&fit=crop"),
            w("subway", "Underground train system", "https://images.unsplash.com/photo-1565120130276-dfbd9a7a3ad7?w=300&h=300&fit=crop"),
            w("skyline", "The outline of buildings against the sky", "https://images.unsplash.com/photo-1514565131-fce0801e5785?w=300&h=300&fit=crop"),
            w("traffic", "Vehicles moving on roads", "https://images.unsplash.com/photo-1566143260825-4ceebd425d8e?w=300&h=300&fit=crop"),
            w("tower", "A tall, narrow building or structure", "https://images.unsplash.com/photo-1549092273-8b23dde8ac2b?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 5,
        title: "Sports World",
        story: "Coach Chris is teaching a sports class! Help the students learn about different sports and the equipment used to play them.",
        lesson: "Sports and athletic equipment",
        words: [
            w("soccer", "A game played by kicking a ball", "https://images.unsplash.com/photo-1579952363873-27f3bade9f55?w=300&h=300&fit=crop"),
            w("tennis", "A game played with rackets and a ball", "https://images.unsplash.com/photo-1595435934249-5df7ed86e1c0?w=300&h=300&fit=crop"),
            w("hockey", "A game played with sticks and a puck", "https://images.unsplash.com/photo-1580692475446-c2fabbbbf835?w=300&h=300&fit=crop"),
            w("basket", "Where you score points in basketball", "https://images.unsplash.com/photo-1519861531473-9200262188bf?w=300&h=300&fit=crop"),
            w("medal", "A prize given to winners", "https://images.unsplash.com/photo-1567427361984-0cbe7396fc6c?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 6,
        title: "Food Festival",
        story: "Chef Charlie is hosting a food festival! Help him identify different dishes and ingredients from around the world.",
        lesson: "Food vocabulary and culinary terms",
        words: [
            w("pasta", "Italian food made from dough", "https://images.unsplash.com/photo-1551183053-bf91a1d81141?w=300&h=300&fit=crop"),
            w("sushi", "Japanese food with rice and fish", "https://images.unsplash.com/photo-1579871494447-9811cf80d66c?w=300&h=300&fit=crop"),
            w("taco", "Mexican food in a folded tortilla", "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=300&h=300&fit=crop"),
            w("curry", "Spicy dish from India", "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=300&h=300&fit=crop"),
            w("bread", "Baked food made from flour", "https://images.unsplash.com/photo-1549931319-a545dcf3bc7b?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 7,
        title: "Music Journey",
        story: "Musician Mia is teaching a music class! Help her students learn about different instruments and musical terms.",
        lesson: "Musical instruments and terminology",
        words: [
            w("piano", "Instrument with black and white keys", "https://images.unsplash.com/photo-1520523839897-bd0b52f945a0?w=300&h=300&fit=crop"),
            w("guitar", "Stringed instrument you strum", "https://images.unsplash.com/photo-1525201548942-d8732f6617a0?w=300&h=300&fit=crop"),
            w("drum", "Percussion instrument you hit", "https://images.unsplash.com/photo-1519892300165-cb5542fb47c7?w=300&h=300&fit=crop"),
            w("flute", "Wind instrument you blow across", "https://images.unsplash.com/photo-1621368286550-f54551f39b91?w=300&h=300&fit=crop"),
            w("violin", "Stringed instrument played with a bow", "https://images.unsplash.com/photo-1612225330812-01a9c6b355ec?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 8,
        title: "Art Gallery",
        story: "Artist Aaron is hosting an exhibition! Help visitors learn about different art styles and techniques.",
        lesson: "Art terminology and famous works",
        words: [
            w("paint", "Colored liquid used to make pictures", "https://images.unsplash.com/photo-1541085388148-a28cfd55c7c2?w=300&h=300&fit=crop"),
            w("sketch", "A quick drawing often done in pencil", "https://images.unsplash.com/photo-1602738328654-51ab2ae6c350?w=300&h=300&fit=crop"),
            w("canvas", "Fabric surface for painting", "https://images.unsplash.com/photo-1579762593175-20226054cad0?w=300&h=300&fit=crop"),
            w("mural", "Artwork painted on a wall", "https://images.unsplash.com/photo-1551913902-c92207136625?w=300&h=300&fit=crop"),
            w("statue", "Three-dimensional artwork", "https://images.unsplash.com/photo-1577083288073-40892c0860a4?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 9,
        title: "Transportation",
        story: "Engineer Ethan is designing new vehicles! Help him identify different modes of transportation.",
        lesson: "Vehicles and transportation vocabulary",
        words: [
            w("train", "Vehicle that runs on tracks", "https://images.unsplash.com/photo-1474487548417-781cb71495f3?w=300&h=300&fit=crop"),
            w("plane", "Flying vehicle with wings", "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?w=300&h=300&fit=crop"),
            w("ship", "Large vessel for water travel", "https://images.unsplash.com/photo-1605281317010-fe5ffe798166?w=300&h=300&fit=crop"),
            w("truck", "Large vehicle for carrying goods", "https://images.unsplash.com/photo-1523326350151-473b504afa42?w=300&h=300&fit=crop"),
            w("bike", "Two-wheeled vehicle you pedal", "https://images.unsplash.com/photo-1485965120184-e220f721d03e?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 10,
        title: "Nature Hike",
        story: "Naturalist Nina is leading a hike through the forest! Help her identify different plants and natural features along the trail.",
        lesson: "Nature vocabulary and environmental terms",
        words: [
            w("forest", "A large area covered with trees", "https://images.unsplash.com/photo-1448375240586-882707db888b?w=300&h=300&fit=crop"),
            w("river", "A large natural stream of water", "https://images.unsplash.com/photo-1437482078695-73f5ca6c96e2?w=300&h=300&fit=crop"),
            w("mountain", "A very high hill with steep sides", "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?w=300&h=300&fit=crop"),
            w("flower", "The colorful part of a plant", "https://images.unsplash.com/photo-1490750967868-88aa4486c946?w=300&h=300&fit=crop"),
            w("valley", "Low land between hills or mountains", "https://images.unsplash.com/photo-1464852045489-bccb7d17fe39?w=300&h=300&fit=crop"),
        ],
    },
];

pub(super) static HARD: &[LevelDef] = &[
    LevelDef {
        id: 1,
        title: "Ancient Civilizations",
        story: "Join Archaeologist Amelia on her expedition to uncover the secrets of ancient civilizations! Help her identify important artifacts and concepts from long ago.",
        lesson: "Historical vocabulary and ancient cultures",
        words: [
            w("pyramid", "Ancient structure with triangular sides", "https://images.unsplash.com/photo-1503177119275-0aa32b3a9368?w=300&h=300&fit=crop"),
            w("pharaoh", "Ancient Egyptian ruler", "https://images.unsplash.com/photo-1608547222597-33fb6f8d5157?w=300&h=300&fit=crop"),
            w("artifact", "Historical object made by humans", "https://images.unsplash.com/photo-1618840739221-e3adb12c9bf1?w=300&h=300&fit=crop"),
            w("hieroglyph", "Ancient Egyptian writing system", "https://images.unsplash.com/photo-1552083974-186346191183?w=300&h=300&fit=crop"),
            w("civilization", "Advanced human society with culture", "https://images.unsplash.com/photo-1606820854416-439b3305ff39?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 2,
        title: "Scientific Discoveries",
        story: "Step into Professor Parker's laboratory! He's conducting experiments and making discoveries about how our world works. Can you help him name the scientific concepts?",
        lesson: "Scientific terminology and concepts",
        words: [
            w("gravity", "Force that pulls objects toward Earth", "https://images.unsplash.com/photo-1454789548928-9efd52dc4031?w=300&h=300&fit=crop"),
            w("molecule", "Group of atoms bonded together", "https://images.unsplash.com/photo-1532187863486-abf9dbad1b69?w=300&h=300&fit=crop"),
            w("ecosystem", "Community of living things and environment", "https://images.unsplash.com/photo-1501854140801-50d01698950b?w=300&h=300&fit=crop"),
            w("photosynthesis", "Process plants use to make food from sunlight", "https://images.unsplash.com/photo-1500382017468-9049fed747ef?w=300&h=300&fit=crop"),
            w("experiment", "Test to discover or demonstrate something", "https://images.unsplash.com/photo-1582719471384-894fbb16e074?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 3,
        title: "Literary Classics",
        story: "Librarian Leo is organizing a special exhibition on classic literature! Help him identify important literary terms and famous works.",
        lesson: "Literary terminology and famous works",
        words: [
            w("novel", "A long fictional story in book form", "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=300&h=300&fit=crop"),
            w("poetry", "Writing that uses rhythm and sometimes rhymes", "https://images.unsplash.com/photo-1474932430478-367dbb6832c1?w=300&h=300&fit=crop"),
            w("character", "A person in a story or play", "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=300&h=300&fit=crop"),
            w("metaphor", "Comparing two things without using 'like' or 'as'", "https://images.unsplash.com/photo-1457369804613-52c61a468e7d?w=300&h=300&fit=crop"),
            w("dialogue", "Words spoken by characters in a story", "https://images.unsplash.com/photo-1529473814998-077b4fec6770?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 4,
        title: "World Geography",
        story: "Geographer Grace is mapping the world! Help her identify important geographical features and locations.",
        lesson: "Geographical terms and world locations",
        words: [
            w("continent", "One of the seven large land masses on Earth", "https://images.unsplash.com/photo-1589519160732-57fc6a9dfe37?w=300&h=300&fit=crop"),
            w("peninsula", "Land surrounded by water on three sides", "https://images.unsplash.com/photo-1527004013197-933c4bb611b3?w=300&h=300&fit=crop"),
            w("archipelago", "A group of islands", "https://images.unsplash.com/photo-1559128010-7c1ad6e1b6a5?w=300&h=300&fit=crop"),
            w("equator", "Imaginary line around the middle of Earth", "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=300&h=300&fit=crop"),
            w("plateau", "A large flat area of land that is higher than the surrounding land", "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 5,
        title: "Historical Figures",
        story: "Historian Helen is creating a timeline of important people throughout history! Help her identify famous historical figures and their contributions.",
        lesson: "Famous historical figures and their achievements",
        words: [
            w("inventor", "Person who creates new things", "https://images.unsplash.com/photo-1531297484001-80022131f5a1?w=300&h=300&fit=crop"),
            w("explorer", "Person who travels to discover new places", "https://images.unsplash.com/photo-1501555088652-021faa106b9b?w=300&h=300&fit=crop"),
            w("scientist", "Person who studies the natural world", "https://images.unsplash.com/photo-1507413245164-6160d8298b31?w=300&h=300&fit=crop"),
            w("monarch", "A king or queen", "https://images.unsplash.com/photo-1478479405421-ce83c92fb3ba?w=300&h=300&fit=crop"),
            w("philosopher", "Person who studies ideas about knowledge and existence", "https://images.unsplash.com/photo-1509909756405-be0199881695?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 6,
        title: "Mathematical Concepts",
        story: "Mathematician Morgan is solving complex problems! Help identify mathematical terms and concepts used in advanced calculations.",
        lesson: "Mathematical terminology and concepts",
        words: [
            w("fraction", "A part of a whole number", "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=300&h=300&fit=crop"),
            w("equation", "Mathematical statement showing two expressions are equal", "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=300&h=300&fit=crop"),
            w("geometry", "Branch of math dealing with shapes and spaces", "https://images.unsplash.com/photo-1509228468518-180dd4864904?w=300&h=300&fit=crop"),
            w("algebra", "Branch of math using letters to represent numbers", "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=300&h=300&fit=crop"),
            w("calculus", "Advanced math dealing with rates of change", "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 7,
        title: "Technological Innovations",
        story: "Tech Innovator Tina is showcasing the latest technological breakthroughs! Help her explain important tech concepts and devices.",
        lesson: "Technology terminology and concepts",
        words: [
            w("computer", "Electronic device that processes data", "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=300&h=300&fit=crop"),
            w("internet", "Global network connecting computers", "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=300&h=300&fit=crop"),
            w("algorithm", "Step-by-step procedure for calculations", "https://images.unsplash.com/photo-1516259762381-22954d7d3ad2?w=300&h=300&fit=crop"),
            w("software", "Programs and operating information for computers", "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=300&h=300&fit=crop"),
            w("database", "Organized collection of data", "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 8,
        title: "Environmental Science",
        story: "Environmental Scientist Eliza is studying ecosystems! Help her identify important environmental concepts and issues.",
        lesson: "Environmental terminology and concepts",
        words: [
            w("climate", "Weather conditions in an area over a long period", "https://images.unsplash.com/photo-1534274988757-a28bf1a57c17?w=300&h=300&fit=crop"),
            w("pollution", "Harmful substances in the environment", "https://images.unsplash.com/photo-1611273426858-450d8e3c9fce?w=300&h=300&fit=crop"),
            w("biodiversity", "Variety of plant and animal life in a habitat", "https://images.unsplash.com/photo-1527482797697-8795b05a13fe?w=300&h=300&fit=crop"),
            w("conservation", "Protection of natural resources", "https://images.unsplash.com/photo-1618477202872-5b9142f23e93?w=300&h=300&fit=crop"),
            w("renewable", "Resource that can be naturally replaced", "https://images.unsplash.com/photo-1508514177221-188b1cf16e9d?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 9,
        title: "Cultural Traditions",
        story: "Cultural Anthropologist Camila is studying traditions around the world! Help her identify important cultural concepts and practices.",
        lesson: "Cultural terminology and global traditions",
        words: [
            w("festival", "Special celebration with customs and ceremonies", "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=300&h=300&fit=crop"),
            w("tradition", "Custom passed down from generation to generation", "https://images.unsplash.com/photo-1604431696980-07c753e1c4b9?w=300&h=300&fit=crop"),
            w("heritage", "Traditions and achievements passed down over time", "https://images.unsplash.com/photo-1551918120-9739cb430c6d?w=300&h=300&fit=crop"),
            w("ceremony", "Formal event performed on special occasions", "https://images.unsplash.com/photo-1469371670807-013ccf25f16a?w=300&h=300&fit=crop"),
            w("cuisine", "Style of cooking specific to a country or region", "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=300&h=300&fit=crop"),
        ],
    },
    LevelDef {
        id: 10,
        title: "Astronomical Wonders",
        story: "Astronomer Astra is observing the night sky! Help her identify celestial objects and astronomical phenomena.",
        lesson: "Astronomy terminology and celestial objects",
        words: [
            w("constellation", "Group of stars forming a pattern", "https://images.unsplash.com/photo-1534447677768-be436bb09401?w=300&h=300&fit=crop"),
            w("nebula", "Cloud of gas and dust in space", "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?w=300&h=300&fit=crop"),
            w("telescope", "Instrument used to view distant objects in space", "https://images.unsplash.com/photo-1465101162946-4377e57745c3?w=300&h=300&fit=crop"),
            w("satellite", "Object that orbits around a planet", "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?w=300&h=300&fit=crop"),
            w("eclipse", "When one celestial body blocks light from another", "https://images.unsplash.com/photo-1503891450247-ee5f8ec46dc3?w=300&h=300&fit=crop"),
        ],
    },
];
