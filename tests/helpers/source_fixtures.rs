//! Common Ruby source fixtures for tests.

pub const CLASS_WITH_METHODS: &str = r##"# frozen_string_literal: true

class Foo
  # @return [String]
  def method1
    'bar'
  end

  # @param [String] name
  # @return [String]
  def method2(name)
    "Hello, #{name}!"
  end
end
"##;

pub const CLASS_WITH_METHODS_CONVERTED: &str = r##"# frozen_string_literal: true

class Foo
  # @rbs return: String
  def method1
    'bar'
  end

  # @rbs name: String
  # @rbs return: String
  def method2(name)
    "Hello, #{name}!"
  end
end
"##;

/// A run with a tag the converter does not understand
pub const MIXED_FOREIGN_TAG: &str = r##"class Repo
  # Saves the record.
  # @param [Hash] attrs
  # @raise [ActiveRecord::RecordInvalid]
  def save!(attrs)
    create!(attrs)
  end
end
"##;

/// Descriptions, reordering and the name-first `@param` form
pub const DESCRIPTIONS_AND_ORDER: &str = r##"module Greeter
  # Greets someone.
  # @return [String, nil] the greeting
  # @param name [String] who to greet
  # @param [Boolean] loud shout it
  def self.greet(name, loud)
    loud ? "HI #{name}" : "hi #{name}"
  end
end
"##;

pub const DESCRIPTIONS_AND_ORDER_CONVERTED: &str = r##"module Greeter
  # Greets someone.
  # @rbs name: String -- who to greet
  # @rbs loud: bool -- shout it
  # @rbs return: String | nil -- the greeting
  def self.greet(name, loud)
    loud ? "HI #{name}" : "hi #{name}"
  end
end
"##;

/// Annotation lookalikes inside literals, none of which are comments
pub const LITERAL_LOOKALIKES: &str = r##"TEMPLATE = <<~RUBY
  # @return [String]
  def generated
  end
RUBY

PATTERN = %r{# @param [String] name}
QUOTED = "# @return [Integer]"

=begin
# @return [Hash]
def documented
end
=end

# @return [Array]
def real
  []
end
"##;

pub const LITERAL_LOOKALIKES_CONVERTED: &str = r##"TEMPLATE = <<~RUBY
  # @return [String]
  def generated
  end
RUBY

PATTERN = %r{# @param [String] name}
QUOTED = "# @return [Integer]"

=begin
# @return [Hash]
def documented
end
=end

# @rbs return: Array[untyped]
def real
  []
end
"##;

/// A parenthesized type is fatal for the whole file
pub const PARENTHESIZED_TYPE: &str = r##"class Jobs
  # @return [String]
  def name
    'jobs'
  end

  # @param [Proc(Integer)] callback
  def each(callback)
  end
end
"##;

pub const NO_ANNOTATIONS: &str = r##"# frozen_string_literal: true

# Plain documentation only.
class Plain
  # Says hi.
  def hi
    'hi'
  end
end
"##;
