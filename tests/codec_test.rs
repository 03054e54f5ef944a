//! Integration tests for the tagged codec and the link resolver.

use dm_resources::{
    decode, encode, CodecError, Context, LinkTarget, Resource, ResourceKind, VariantRegistry,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn type_sequence(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|element| element["type"].as_str().unwrap())
        .collect()
}

// === Scenarios ===

mod scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn folder_contents_folder_then_item() {
        let wire = json!([
            { "type": "folders", "id": "f1", "name": "Root" },
            { "type": "items", "id": "i1", "name": "doc.rvt" }
        ]);

        let resources = decode(&wire, Context::FolderContents).unwrap();
        assert_eq!(resources.len(), 2);

        let Resource::Folder(folder) = &resources[0] else {
            panic!("expected folder first, got {:?}", resources[0]);
        };
        assert_eq!(folder.id, "f1");
        assert_eq!(folder.extra["name"], json!("Root"));

        let Resource::Item(item) = &resources[1] else {
            panic!("expected item second, got {:?}", resources[1]);
        };
        assert_eq!(item.id, "i1");
        assert_eq!(item.extra["name"], json!("doc.rvt"));

        let encoded = encode(&resources, Context::FolderContents).unwrap();
        assert_eq!(type_sequence(&encoded), vec!["folders", "items"]);
        assert_eq!(encoded, wire);
    }

    #[test]
    fn version_is_not_folder_content() {
        let wire = json!([{ "type": "versions", "id": "v1" }]);
        let err = decode(&wire, Context::FolderContents).unwrap_err();
        assert_eq!(err.unknown_tag(), Some("versions"));
    }
}

// === Round trip ===

mod round_trip {
    use super::*;
    use pretty_assertions::assert_eq;

    fn realistic_refs() -> Value {
        json!([
            {
                "type": "folders",
                "id": "urn:adsk.wipprod:fs.folder:co.root",
                "attributes": {
                    "name": "Project Files",
                    "displayName": "Project Files",
                    "createTime": "2024-03-01T10:00:00.0000000Z",
                    "objectCount": 4,
                    "hidden": false,
                    "extension": {
                        "type": "folders:autodesk.bim360:Folder",
                        "version": "1.0",
                        "schema": { "href": "https://developer.api.autodesk.com/schema/v1/versions/folders:autodesk.bim360:Folder-1.0" },
                        "data": { "allowedTypes": ["items", "folders"] }
                    }
                },
                "links": { "self": { "href": "https://dm/folders/root" } },
                "relationships": {
                    "parent": { "data": { "type": "folders", "id": "urn:top" } }
                }
            },
            {
                "type": "items",
                "id": "urn:adsk.wipprod:dm.lineage:abc",
                "attributes": {
                    "displayName": "tower.rvt",
                    "reserved": false,
                    "pathInProject": "/Project Files"
                },
                "links": {
                    "self": { "href": "https://dm/items/abc" },
                    "webView": { "href": "https://docs/items/abc" }
                }
            },
            {
                "type": "versions",
                "id": "urn:adsk.wipprod:fs.file:vf.abc?version=3",
                "attributes": {
                    "name": "tower.rvt",
                    "versionNumber": 3,
                    "mimeType": "application/vnd.autodesk.r360",
                    "storageSize": 73400320,
                    "customProperty": { "nested": [1, 2, 3] }
                },
                "meta": { "source": "upload" }
            }
        ])
    }

    #[test]
    fn every_tagged_context_round_trips() {
        let wire = realistic_refs();
        for context in [
            Context::FolderRefs,
            Context::Refs,
            Context::RelationshipRefsIncluded,
        ] {
            let resources = decode(&wire, context).unwrap();
            assert_eq!(encode(&resources, context).unwrap(), wire, "{context}");
        }
    }

    #[test]
    fn list_refs_round_trip() {
        let wire = json!([
            { "type": "versions", "id": "v2", "attributes": { "versionNumber": 2 } },
            { "type": "items", "id": "i1" },
            { "type": "versions", "id": "v1", "attributes": { "versionNumber": 1 } }
        ]);
        let resources = decode(&wire, Context::ListRefsIncluded).unwrap();
        let encoded = encode(&resources, Context::ListRefsIncluded).unwrap();
        assert_eq!(type_sequence(&encoded), vec!["versions", "items", "versions"]);
        assert_eq!(encoded, wire);
    }

    /// Elements whose nested objects carry unnamed members and explicit nulls.
    fn sparse_and_extended() -> Vec<Value> {
        vec![
            json!({
                "type": "folders",
                "id": "f1",
                "attributes": {
                    "name": "Plans",
                    "hidden": null,
                    "color": "blue",
                    "extension": {
                        "type": "folders:autodesk.core:Folder",
                        "version": null,
                        "schema": { "href": "https://dm/schema/folder", "x": 1 },
                        "data": null,
                        "origin": "bim360"
                    }
                },
                "links": {
                    "self": { "href": "https://dm/folders/f1", "rel": "self", "meta": null },
                    "webView": null
                },
                "relationships": null,
                "meta": null
            }),
            json!({
                "type": "items",
                "id": "i1",
                "attributes": null,
                "links": {
                    "self": { "href": "https://dm/items/i1", "rel": "self" },
                    "webView": "https://docs/items/i1",
                    "describedby": { "href": "https://dm/items/i1/schema" }
                }
            }),
            json!({
                "type": "versions",
                "id": "v1",
                "attributes": {
                    "versionNumber": null,
                    "mimeType": null,
                    "extension": { "schema": "https://dm/schema/version", "data": { "k": [null] } }
                },
                "links": null
            }),
        ]
    }

    #[test]
    fn unnamed_members_and_nulls_survive_every_tagged_context() {
        let elements = sparse_and_extended();
        for context in Context::ALL.into_iter().filter(|c| !c.is_link_object()) {
            let tags = VariantRegistry::for_context(context).unwrap().tags();
            let wire = Value::Array(
                elements
                    .iter()
                    .filter(|element| tags.iter().any(|tag| element["type"] == *tag))
                    .cloned()
                    .collect(),
            );

            let resources = decode(&wire, context).unwrap();
            assert_eq!(resources.len(), wire.as_array().unwrap().len(), "{context}");

            let encoded = encode(&resources, context).unwrap();
            assert_eq!(type_sequence(&encoded), type_sequence(&wire), "{context}");
            assert_eq!(encoded, wire, "{context}");
        }
    }

    #[test]
    fn link_target_members_survive_a_tagged_context() {
        let wire = json!([{
            "type": "items",
            "id": "i1",
            "links": { "self": { "href": "https://dm/items/i1", "rel": "self" } }
        }]);
        let resources = decode(&wire, Context::Refs).unwrap();

        let Resource::Item(item) = &resources[0] else {
            panic!("expected item, got {:?}", resources[0]);
        };
        let target = item.links.clone().flatten().and_then(|links| links.self_link.flatten());
        let Some(LinkTarget::Href(link)) = target else {
            panic!("expected href link, got {target:?}");
        };
        assert_eq!(link.extra["rel"], json!("self"));

        assert_eq!(encode(&resources, Context::Refs).unwrap(), wire);
    }

    #[test]
    fn link_objects_round_trip() {
        for wire in [
            json!({ "self": "https://x" }),
            json!({ "related": { "href": "https://y" } }),
            json!({ "self": { "href": "https://x", "meta": { "link": "parent" } } }),
            json!({ "related": { "href": "https://y", "title": "parent", "meta": null } }),
        ] {
            let resources = decode(&wire, Context::RelationshipRefsLinks).unwrap();
            assert_eq!(
                encode(&resources, Context::RelationshipRefsLinks).unwrap(),
                wire
            );
        }
    }
}

// === Ordering ===

mod ordering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kinds_follow_input_order() {
        let wire = json!([
            { "type": "items", "id": "i1" },
            { "type": "versions", "id": "v1" },
            { "type": "folders", "id": "f1" },
            { "type": "items", "id": "i2" }
        ]);
        let resources = decode(&wire, Context::Refs).unwrap();
        let kinds: Vec<ResourceKind> = resources.iter().map(Resource::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ResourceKind::Item,
                ResourceKind::Version,
                ResourceKind::Folder,
                ResourceKind::Item
            ]
        );
        let tags: Vec<&str> = kinds.iter().filter_map(ResourceKind::wire_tag).collect();
        assert_eq!(tags, type_sequence(&wire));
    }
}

// === Failure modes ===

mod failures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bogus_tag_fails_in_every_tagged_context() {
        let wire = json!([{ "type": "bogus", "id": "x" }]);
        for context in Context::ALL.into_iter().filter(|c| !c.is_link_object()) {
            let err = decode(&wire, context).unwrap_err();
            assert_eq!(err.unknown_tag(), Some("bogus"), "{context}");
        }
    }

    #[test]
    fn one_bad_element_fails_the_whole_decode() {
        let wire = json!([
            { "type": "folders", "id": "f1" },
            { "type": "items", "id": "i1" },
            { "type": "bogus", "id": "b1" },
            { "type": "items", "id": "i2" }
        ]);
        let result = decode(&wire, Context::FolderContents);
        assert!(matches!(
            result,
            Err(CodecError::UnknownVariant { index: 2, .. })
        ));
    }

    #[test]
    fn error_message_lists_expected_tags_in_priority_order() {
        let err = decode(&json!([{ "type": "bogus" }]), Context::ListRefsIncluded).unwrap_err();
        assert!(err.to_string().ends_with("expected one of items, versions"));
    }

    #[test]
    fn link_disambiguation() {
        let ctx = Context::RelationshipRefsLinks;

        let link = decode(&json!({ "self": "https://x" }), ctx).unwrap();
        assert_eq!(link[0].kind(), ResourceKind::LinkSelf);

        let link = decode(&json!({ "related": "https://y" }), ctx).unwrap();
        assert_eq!(link[0].kind(), ResourceKind::LinkRelated);

        let err = decode(&json!({}), ctx).unwrap_err();
        assert!(matches!(err, CodecError::UnknownLinkShape));
    }

    #[test]
    fn encoding_a_link_in_a_tagged_context_is_rejected() {
        let links = decode(&json!({ "self": "https://x" }), Context::RelationshipRefsLinks).unwrap();
        let err = encode(&links, Context::Refs).unwrap_err();
        assert!(matches!(
            err,
            CodecError::VariantNotInContext {
                kind: ResourceKind::LinkSelf,
                context: Context::Refs
            }
        ));
    }
}

// === Discriminator ===

mod discriminator {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_element_has_exactly_one_type_key() {
        for (context, wire) in [
            (Context::FolderContents, json!([{ "type": "folders", "id": "f1" }])),
            (Context::Refs, json!([{ "type": "versions", "id": "v1" }])),
            (Context::ListRefsIncluded, json!([{ "type": "items", "id": "i1" }])),
        ] {
            let resources = decode(&wire, context).unwrap();
            let encoded = encode(&resources, context).unwrap();
            let object = encoded[0].as_object().unwrap();
            let type_keys = object
                .keys()
                .filter(|key| key.eq_ignore_ascii_case("type"))
                .count();
            assert_eq!(type_keys, 1);
        }
    }

    #[test]
    fn tag_comes_from_the_case_not_from_the_payload() {
        let resources = decode(
            &json!([{ "type": "folders", "id": "f1", "Type": "items" }]),
            Context::FolderContents,
        )
        .unwrap();
        let encoded = encode(&resources, Context::FolderContents).unwrap();
        assert_eq!(encoded, json!([{ "type": "folders", "id": "f1" }]));
    }

    #[test]
    fn registries_are_shared_statics() {
        let a = VariantRegistry::for_context(Context::Refs).unwrap();
        let b = VariantRegistry::for_context(Context::Refs).unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
