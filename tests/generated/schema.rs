// @generated by relselect-codegen. Do not edit by hand.

#[doc = " `User` table"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct User;
#[doc = " Row fields of `User`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Id,
    FirstName,
    LastName,
    Email,
    CreatedAt,
}
impl ::relselect::typed::Field for UserField {
    fn name(self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::FirstName => "firstName",
            UserField::LastName => "lastName",
            UserField::Email => "email",
            UserField::CreatedAt => "createdAt",
        }
    }
}
impl ::relselect::typed::Table for User {
    const NAME: &'static str = "User";
    type Field = UserField;
}
impl ::relselect::typed::Includable<Comment> for User {}
impl ::relselect::typed::Includable<UserOrganization> for User {}
#[doc = " `Organization` table"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Organization;
#[doc = " Row fields of `Organization`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationField {
    Id,
    Name,
    Slug,
}
impl ::relselect::typed::Field for OrganizationField {
    fn name(self) -> &'static str {
        match self {
            OrganizationField::Id => "id",
            OrganizationField::Name => "name",
            OrganizationField::Slug => "slug",
        }
    }
}
impl ::relselect::typed::Table for Organization {
    const NAME: &'static str = "Organization";
    type Field = OrganizationField;
}
impl ::relselect::typed::Includable<UserOrganization> for Organization {}
#[doc = " `UserOrganization` table"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserOrganization;
#[doc = " Row fields of `UserOrganization`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserOrganizationField {
    Id,
    UserId,
    OrganizationId,
    Role,
}
impl ::relselect::typed::Field for UserOrganizationField {
    fn name(self) -> &'static str {
        match self {
            UserOrganizationField::Id => "id",
            UserOrganizationField::UserId => "userId",
            UserOrganizationField::OrganizationId => "organizationId",
            UserOrganizationField::Role => "role",
        }
    }
}
impl ::relselect::typed::Table for UserOrganization {
    const NAME: &'static str = "UserOrganization";
    type Field = UserOrganizationField;
}
impl ::relselect::typed::Includable<Organization> for UserOrganization {}
impl ::relselect::typed::Includable<User> for UserOrganization {}
#[doc = " `Comment` table"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comment;
#[doc = " Row fields of `Comment`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentField {
    Id,
    Body,
    AuthorId,
    ParentId,
}
impl ::relselect::typed::Field for CommentField {
    fn name(self) -> &'static str {
        match self {
            CommentField::Id => "id",
            CommentField::Body => "body",
            CommentField::AuthorId => "authorId",
            CommentField::ParentId => "parentId",
        }
    }
}
impl ::relselect::typed::Table for Comment {
    const NAME: &'static str = "Comment";
    type Field = CommentField;
}
impl ::relselect::typed::Includable<Comment> for Comment {}
impl ::relselect::typed::Includable<User> for Comment {}
#[doc = " `Setting` table"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Setting;
#[doc = " Row fields of `Setting`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    Key,
    Value,
}
impl ::relselect::typed::Field for SettingField {
    fn name(self) -> &'static str {
        match self {
            SettingField::Key => "key",
            SettingField::Value => "value",
        }
    }
}
impl ::relselect::typed::Table for Setting {
    const NAME: &'static str = "Setting";
    type Field = SettingField;
}
