use graphql_types::{
    EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType, NamedType, ObjectType,
    Schema, Thunk, Type, UnionType, Value,
};
use indexmap::IndexMap;
use std::sync::{Arc, OnceLock};

/// A small Star-Wars-shaped schema: `Character` interface with `Human` and
/// `Droid` implementors, an `Episode` enum, a `SearchResult` union, and a
/// `ReviewInput` input object, so every abstract-type and input-shape rule
/// under test has something real to exercise. `Character`'s own `friends:
/// [Character]` field is self-referential, resolved the same way the SDL
/// builder resolves mutually recursive types: a shared cell set once the
/// `Arc` it needs to close over exists.
pub fn star_wars_schema() -> Schema {
    let episode = Arc::new(EnumType::new("Episode", {
        let mut values = IndexMap::new();
        for name in ["NEWHOPE", "EMPIRE", "JEDI"] {
            values.insert(
                name.to_string(),
                EnumValue {
                    name: name.to_string(),
                    description: None,
                    internal_value: Value::Enum(name.to_string()),
                    deprecation_reason: None,
                    directives: Vec::new(),
                },
            );
        }
        values
    }));

    let character_cell: Arc<OnceLock<Arc<InterfaceType>>> = Arc::new(OnceLock::new());
    let character = {
        let cell = character_cell.clone();
        let episode = episode.clone();
        Arc::new(InterfaceType::new(
            "Character",
            None,
            Vec::new(),
            Thunk::eager(Vec::new()),
            Thunk::lazy(move || {
                let character = cell.get().expect("character registered before first field access").clone();
                let mut fields = IndexMap::new();
                fields.insert("id".to_string(), Field::new("id", Type::non_null(Type::id())));
                fields.insert("name".to_string(), Field::new("name", Type::non_null(Type::string())));
                fields.insert(
                    "appearsIn".to_string(),
                    Field::new("appearsIn", Type::list(Type::named(NamedType::Enum(episode.clone())))),
                );
                fields.insert(
                    "friends".to_string(),
                    Field::new("friends", Type::list(Type::named(NamedType::Interface(character)))),
                );
                fields
            }),
        ))
    };
    character_cell.set(character.clone()).ok();

    let human = Arc::new(ObjectType::new(
        "Human",
        None,
        Vec::new(),
        Thunk::eager(vec![character.clone()]),
        Thunk::eager({
            let mut fields = IndexMap::new();
            fields.insert("id".to_string(), Field::new("id", Type::non_null(Type::id())));
            fields.insert("name".to_string(), Field::new("name", Type::non_null(Type::string())));
            fields.insert(
                "appearsIn".to_string(),
                Field::new("appearsIn", Type::list(Type::named(NamedType::Enum(episode.clone())))),
            );
            fields.insert(
                "friends".to_string(),
                Field::new("friends", Type::list(Type::named(NamedType::Interface(character.clone())))),
            );
            fields.insert("homePlanet".to_string(), Field::new("homePlanet", Type::string()));
            fields
        }),
    ));

    let droid = Arc::new(ObjectType::new(
        "Droid",
        None,
        Vec::new(),
        Thunk::eager(vec![character.clone()]),
        Thunk::eager({
            let mut fields = IndexMap::new();
            fields.insert("id".to_string(), Field::new("id", Type::non_null(Type::id())));
            fields.insert("name".to_string(), Field::new("name", Type::non_null(Type::string())));
            fields.insert(
                "appearsIn".to_string(),
                Field::new("appearsIn", Type::list(Type::named(NamedType::Enum(episode.clone())))),
            );
            fields.insert(
                "friends".to_string(),
                Field::new("friends", Type::list(Type::named(NamedType::Interface(character.clone())))),
            );
            fields.insert("primaryFunction".to_string(), Field::new("primaryFunction", Type::string()));
            fields
        }),
    ));

    let search_result = Arc::new(UnionType::new("SearchResult", None, Vec::new(), Thunk::eager(vec![human.clone(), droid.clone()])));

    let review_input = Arc::new(InputObjectType::new("ReviewInput", None, Vec::new(), Thunk::eager({
        let mut fields = IndexMap::new();
        fields.insert("stars".to_string(), InputValue { value_type: Type::non_null(Type::int()), default_value: None, description: None });
        fields.insert("commentary".to_string(), InputValue { value_type: Type::string(), default_value: None, description: None });
        fields
    })));

    let mut hero = Field::new("hero", Type::named(NamedType::Interface(character.clone())));
    hero.args.insert(
        "episode".to_string(),
        InputValue { value_type: Type::named(NamedType::Enum(episode.clone())), default_value: None, description: None },
    );

    let mut human_query = Field::new("human", Type::named(NamedType::Object(human.clone())));
    human_query.args.insert("id".to_string(), InputValue { value_type: Type::non_null(Type::id()), default_value: None, description: None });

    let mut search = Field::new("search", Type::list(Type::named(NamedType::Union(search_result.clone()))));
    search.args.insert("text".to_string(), InputValue { value_type: Type::string(), default_value: None, description: None });

    let query = Arc::new(ObjectType::new("Query", None, Vec::new(), Thunk::eager(Vec::new()), Thunk::eager({
        let mut fields = IndexMap::new();
        fields.insert("hero".to_string(), hero);
        fields.insert("human".to_string(), human_query);
        fields.insert("search".to_string(), search);
        fields
    })));

    let mut create_review = Field::new("createReview", Type::named(NamedType::Object(human.clone())));
    create_review.args.insert(
        "episode".to_string(),
        InputValue { value_type: Type::named(NamedType::Enum(episode.clone())), default_value: None, description: None },
    );
    create_review.args.insert(
        "review".to_string(),
        InputValue {
            value_type: Type::non_null(Type::named(NamedType::InputObject(review_input.clone()))),
            default_value: None,
            description: None,
        },
    );

    let mutation = Arc::new(ObjectType::new("Mutation", None, Vec::new(), Thunk::eager(Vec::new()), Thunk::eager({
        let mut fields = IndexMap::new();
        fields.insert("createReview".to_string(), create_review);
        fields
    })));

    Schema::builder()
        .query(query)
        .mutation(mutation)
        .extra_type(NamedType::Union(search_result))
        .build()
        .expect("fixture schema is valid")
}
